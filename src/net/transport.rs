//! HTTP transport seam.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every send fails with a network error, since these endpoints
//! are only meaningful in the browser. Tests substitute a scripted transport.

use async_trait::async_trait;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully resolved request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and resolves exactly once.
///
/// `?Send` because browser fetch futures are bound to the JS thread.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no HTTP status was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = match &request.bearer {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            };
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(network)?;
            let resp = prepared.send().await.map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
