//! Request/response core shared by every REST call site.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as `ApiError::Network`. Non-success statuses are
//! classified by the caller: auth endpoints map client errors to their own
//! variants via [`auth_rejection`], resource endpoints use
//! [`resource_rejection`].

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::MessageBody;
use crate::config::AppConfig;
use crate::error::ApiError;

/// Base URL plus transport. One instance serves every endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &AppConfig, transport: T) -> Self {
        Self { base_url: config.api_base_url.clone(), transport }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and return the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure and
    /// [`ApiError::Decode`] if `body` cannot be serialized.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest { method, url: self.url(path), bearer: bearer.map(str::to_owned), body };
        match self.transport.send(request).await {
            Ok(response) => {
                if !response.is_success() {
                    leptos::logging::warn!("{method:?} {path} -> {}", response.status);
                }
                Ok(response)
            }
            Err(e) => {
                leptos::logging::warn!("{method:?} {path} failed: {e}");
                Err(e)
            }
        }
    }
}

/// Parse the `{ "message": ... }` field out of an error body.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Decode a success body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `D`.
pub fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Classify a failed auth call: 4xx becomes `reject`, anything else is unexpected.
pub fn auth_rejection(response: &ApiResponse, reject: fn(Option<String>) -> ApiError) -> ApiError {
    let message = server_message(&response.body);
    if (400..500).contains(&response.status) {
        reject(message)
    } else {
        ApiError::Unexpected { status: response.status, message }
    }
}

/// Classify a failed bearer-token call.
#[must_use]
pub fn resource_rejection(response: &ApiResponse) -> ApiError {
    let message = server_message(&response.body);
    match response.status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        status => ApiError::Unexpected { status, message },
    }
}

/// Fail with [`resource_rejection`] unless the response is a success.
///
/// # Errors
///
/// Returns the classified rejection for non-2xx responses.
pub fn expect_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() { Ok(response) } else { Err(resource_rejection(&response)) }
}

/// Bearer token for an authenticated call.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when there is no non-empty token.
pub fn require_bearer(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.is_empty()).ok_or(ApiError::Unauthorized)
}
