//! Admin user-management endpoints.
//!
//! Failures here are shown with fixed wording regardless of what the backend
//! sent, see [`list_failure_message`] and [`delete_failure_message`].

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::client::{ApiClient, decode, expect_success, require_bearer};
use super::transport::{Method, Transport};
use super::types::UserRecord;
use crate::error::ApiError;

pub const USERS_PATH: &str = "/api/auth/users";

fn user_data_path(user_id: i64) -> String {
    format!("/api/auth/user/data/{user_id}")
}

/// List every account. Superuser only.
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` for non-superusers, other
/// classified rejections on non-2xx, `Decode` on a malformed body.
pub async fn list_users<T: Transport>(api: &ApiClient<T>, token: Option<&str>) -> Result<Vec<UserRecord>, ApiError> {
    let token = require_bearer(token)?;
    let response = expect_success(api.send::<()>(Method::Get, USERS_PATH, Some(token), None).await?)?;
    decode(&response)
}

/// Delete an account and its data.
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` when the caller may not delete
/// this user, `NotFound` for an unknown id.
pub async fn delete_user<T: Transport>(api: &ApiClient<T>, token: Option<&str>, user_id: i64) -> Result<(), ApiError> {
    let token = require_bearer(token)?;
    expect_success(api.send::<()>(Method::Delete, &user_data_path(user_id), Some(token), None).await?)?;
    leptos::logging::log!("deleted user {user_id}");
    Ok(())
}

#[must_use]
pub fn list_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Forbidden(_) => "Access denied. Superuser privileges required.",
        _ => "Failed to load users",
    }
}

#[must_use]
pub fn delete_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Forbidden(_) => "Access denied. You can only delete your own data or must be a superuser.",
        ApiError::NotFound(_) => "User not found",
        _ => "Failed to delete user",
    }
}
