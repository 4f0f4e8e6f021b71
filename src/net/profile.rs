//! Profile endpoints for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::client::{ApiClient, decode, expect_success, require_bearer};
use super::transport::{Method, Transport};
use super::types::{Profile, ProfileUpdate};
use crate::error::ApiError;

pub const PROFILE_PATH: &str = "/api/auth/profile";

/// Fetch the profile of the token's owner.
///
/// # Errors
///
/// `Unauthorized` without a token, the classified rejection on non-2xx,
/// `Decode` on a malformed body.
pub async fn fetch_profile<T: Transport>(api: &ApiClient<T>, token: Option<&str>) -> Result<Profile, ApiError> {
    let token = require_bearer(token)?;
    let response = expect_success(api.send::<()>(Method::Get, PROFILE_PATH, Some(token), None).await?)?;
    decode(&response)
}

/// Save the editable profile fields.
///
/// # Errors
///
/// `Unauthorized` without a token, the classified rejection on non-2xx.
pub async fn update_profile<T: Transport>(
    api: &ApiClient<T>,
    token: Option<&str>,
    update: &ProfileUpdate,
) -> Result<(), ApiError> {
    let token = require_bearer(token)?;
    expect_success(api.send(Method::Post, PROFILE_PATH, Some(token), Some(update)).await?)?;
    leptos::logging::log!("profile updated");
    Ok(())
}
