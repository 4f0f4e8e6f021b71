//! Todo endpoints. Every call carries the bearer token.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use super::client::{ApiClient, decode, expect_success, require_bearer};
use super::transport::{Method, Transport};
use super::types::{Todo, TodoDraft, TodoStatusUpdate};
use crate::error::ApiError;

pub const TODOS_PATH: &str = "/api/todos";

fn todo_path(id: i64) -> String {
    format!("{TODOS_PATH}/{id}")
}

/// # Errors
///
/// `Unauthorized` without a token, the classified rejection on non-2xx,
/// `Decode` on a malformed body.
pub async fn list_todos<T: Transport>(api: &ApiClient<T>, token: Option<&str>) -> Result<Vec<Todo>, ApiError> {
    let token = require_bearer(token)?;
    let response = expect_success(api.send::<()>(Method::Get, TODOS_PATH, Some(token), None).await?)?;
    decode(&response)
}

/// Create a todo. The title is required; the description may be empty.
///
/// # Errors
///
/// `MissingField("title")` for a blank title, otherwise as [`list_todos`].
pub async fn create_todo<T: Transport>(api: &ApiClient<T>, token: Option<&str>, draft: &TodoDraft) -> Result<(), ApiError> {
    let draft = TodoDraft { title: draft.title.trim().to_owned(), description: draft.description.trim().to_owned() };
    if draft.title.is_empty() {
        return Err(ApiError::MissingField("title"));
    }
    let token = require_bearer(token)?;
    expect_success(api.send(Method::Post, TODOS_PATH, Some(token), Some(&draft)).await?)?;
    leptos::logging::log!("created todo '{}'", draft.title);
    Ok(())
}

/// Save edited title and description. Returns the stored row.
///
/// # Errors
///
/// `MissingField("title")` for a blank title, otherwise as [`list_todos`].
pub async fn update_todo<T: Transport>(
    api: &ApiClient<T>,
    token: Option<&str>,
    id: i64,
    draft: &TodoDraft,
) -> Result<Todo, ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::MissingField("title"));
    }
    let token = require_bearer(token)?;
    let response = expect_success(api.send(Method::Put, &todo_path(id), Some(token), Some(draft)).await?)?;
    decode(&response)
}

/// Set the completion flag. Returns the stored row.
///
/// # Errors
///
/// As [`list_todos`].
pub async fn set_todo_status<T: Transport>(
    api: &ApiClient<T>,
    token: Option<&str>,
    id: i64,
    status: bool,
) -> Result<Todo, ApiError> {
    let token = require_bearer(token)?;
    let body = TodoStatusUpdate { status };
    let response = expect_success(api.send(Method::Put, &todo_path(id), Some(token), Some(&body)).await?)?;
    decode(&response)
}

/// # Errors
///
/// As [`list_todos`].
pub async fn delete_todo<T: Transport>(api: &ApiClient<T>, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    let token = require_bearer(token)?;
    expect_success(api.send::<()>(Method::Delete, &todo_path(id), Some(token), None).await?)?;
    Ok(())
}
