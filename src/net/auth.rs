//! Auth gateway: login, email signup with OTP, Google exchange, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of the persisted session. `login` and
//! `exchange_google_token` write it on success; `verify_signup_otp` only
//! confirms the account and leaves the session untouched, so a freshly
//! verified user still has to log in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, auth_rejection, decode};
use super::transport::{Method, Transport};
use super::types::{GoogleExchangeRequest, LoginRequest, SessionPayload, VerifyOtpRequest};
use crate::error::ApiError;
use crate::state::otp::PendingIdentity;
use crate::state::session::{Session, SessionStore, SignupMethod};
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_OTP_PATH: &str = "/api/auth/signup-otp";
pub const VERIFY_OTP_PATH: &str = "/api/auth/verify-otp";
pub const GOOGLE_PATH: &str = "/api/auth/google";

pub struct AuthGateway<T, S> {
    api: ApiClient<T>,
    sessions: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> AuthGateway<T, S> {
    pub fn new(api: ApiClient<T>, sessions: SessionStore<S>) -> Self {
        Self { api, sessions }
    }

    #[cfg(test)]
    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Email/password login. Persists the returned session.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank input, `InvalidCredentials` when the backend
    /// rejects the login, `Network` on transport failure, `Storage` if the
    /// session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(ApiError::MissingField("password"));
        }
        let response = self
            .api
            .send(Method::Post, LOGIN_PATH, None, Some(&LoginRequest { email, password }))
            .await?;
        if !response.is_success() {
            return Err(auth_rejection(&response, ApiError::InvalidCredentials));
        }
        let payload: SessionPayload = decode(&response)?;
        let session = payload.into_session(SignupMethod::Email);
        self.sessions.write(&session)?;
        leptos::logging::log!("logged in as {}", session.display_name);
        Ok(session)
    }

    /// Ask the backend to email a signup code for `identity`.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank input, `SignupRejected` on backend rejection
    /// (duplicate email, validation, rate limit), `Network` on transport failure.
    pub async fn request_signup_otp(&self, identity: &PendingIdentity) -> Result<(), ApiError> {
        require_identity(identity)?;
        let response = self.api.send(Method::Post, SIGNUP_OTP_PATH, None, Some(identity)).await?;
        if !response.is_success() {
            return Err(auth_rejection(&response, ApiError::SignupRejected));
        }
        Ok(())
    }

    /// Re-send the signup code for the same identity.
    ///
    /// # Errors
    ///
    /// Same as [`Self::request_signup_otp`].
    pub async fn resend_signup_otp(&self, identity: &PendingIdentity) -> Result<(), ApiError> {
        leptos::logging::log!("resending signup code to {}", identity.email);
        self.request_signup_otp(identity).await
    }

    /// Confirm the emailed code and create the account. Does not log in.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank input, `InvalidOtp` on backend rejection,
    /// `Network` on transport failure.
    pub async fn verify_signup_otp(&self, identity: &PendingIdentity, code: &str) -> Result<(), ApiError> {
        require_identity(identity)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(ApiError::MissingField("otp"));
        }
        let body = VerifyOtpRequest {
            name: &identity.name,
            email: &identity.email,
            password: &identity.password,
            otp: code,
        };
        let response = self.api.send(Method::Post, VERIFY_OTP_PATH, None, Some(&body)).await?;
        if !response.is_success() {
            return Err(auth_rejection(&response, ApiError::InvalidOtp));
        }
        Ok(())
    }

    /// Trade a Google Identity Services credential for a session. Persists it.
    ///
    /// # Errors
    ///
    /// `OAuthFailure` for an empty credential or backend rejection, `Network`
    /// on transport failure, `Storage` if the session cannot be persisted.
    pub async fn exchange_google_token(&self, credential: &str) -> Result<Session, ApiError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(ApiError::OAuthFailure(None));
        }
        let response = self
            .api
            .send(Method::Post, GOOGLE_PATH, None, Some(&GoogleExchangeRequest { token: credential }))
            .await?;
        if !response.is_success() {
            return Err(auth_rejection(&response, ApiError::OAuthFailure));
        }
        let payload: SessionPayload = decode(&response).map_err(|e| {
            leptos::logging::warn!("google exchange returned an unreadable session: {e}");
            ApiError::OAuthFailure(None)
        })?;
        let session = payload.into_session(SignupMethod::Google);
        self.sessions.write(&session)?;
        leptos::logging::log!("signed in with Google as {}", session.display_name);
        Ok(session)
    }

    /// Drop the local session. The backend is not contacted.
    pub fn logout(&self) {
        self.sessions.clear();
    }
}

fn require_identity(identity: &PendingIdentity) -> Result<(), ApiError> {
    if identity.name.trim().is_empty() {
        return Err(ApiError::MissingField("name"));
    }
    if identity.email.trim().is_empty() {
        return Err(ApiError::MissingField("email"));
    }
    if identity.password.is_empty() {
        return Err(ApiError::MissingField("password"));
    }
    Ok(())
}
