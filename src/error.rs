//! Error taxonomy for backend calls and client-side preconditions.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the call site that triggered it and turned into
//! a toast via [`ApiError::user_message`]. Nothing here is fatal: a failed
//! action leaves prior state unchanged and the user free to retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::storage::StorageError;

/// Errors produced by REST calls and the session writes that follow them.
///
/// Variants that correspond to a backend rejection carry the backend's
/// `{"message": ...}` text when the response body had one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport or connectivity failure; no HTTP status was received.
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid credentials")]
    InvalidCredentials(Option<String>),

    #[error("invalid OTP")]
    InvalidOtp(Option<String>),

    /// Duplicate account, server-side validation, or rate limiting.
    #[error("signup rejected")]
    SignupRejected(Option<String>),

    #[error("Google sign-in failed")]
    OAuthFailure(Option<String>),

    /// HTTP 403, e.g. a non-superuser calling an admin endpoint.
    #[error("forbidden")]
    Forbidden(Option<String>),

    /// HTTP 404, e.g. deleting a user that no longer exists.
    #[error("not found")]
    NotFound(Option<String>),

    /// No session token, or the backend answered 401 on a bearer call.
    #[error("not logged in")]
    Unauthorized,

    /// A required form field was empty; nothing was sent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unexpected response status {status}")]
    Unexpected { status: u16, message: Option<String> },

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Backend-provided message, if the response carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::InvalidCredentials(m)
            | Self::InvalidOtp(m)
            | Self::SignupRejected(m)
            | Self::OAuthFailure(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Unexpected { message: m, .. } => m.as_deref(),
            _ => None,
        }
    }

    /// Text shown in the toast for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message().filter(|m| !m.trim().is_empty()) {
            return message.to_owned();
        }
        match self {
            Self::Network(_) | Self::Decode(_) => "Something went wrong. Please try again.".to_owned(),
            Self::InvalidCredentials(_) => "Invalid credentials. Try again!".to_owned(),
            Self::InvalidOtp(_) => "OTP verification failed. Please try again.".to_owned(),
            Self::SignupRejected(_) => "Signup failed. Please try again.".to_owned(),
            Self::OAuthFailure(_) => "Google sign in failed".to_owned(),
            Self::Forbidden(_) => "Access denied.".to_owned(),
            Self::NotFound(_) => "Not found.".to_owned(),
            Self::Unauthorized => "Please log in to continue.".to_owned(),
            Self::MissingField(field) => format!("{} is required.", capitalize(field)),
            Self::Unexpected { status, .. } => format!("Request failed ({status})."),
            Self::Storage(_) => "Could not save your session in this browser.".to_owned(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
