use super::*;
use crate::net::client::mock::{BASE, MockTransport, config};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn list_users_decodes_rows_leniently() {
    let transport = MockTransport::new().respond(
        200,
        json!([
            { "user_id": 1, "username": "Ann", "email": "ann@x.com", "signup_method": "email", "is_superuser": true, "created_at": "2024-05-01T10:00:00.000Z" },
            { "user_id": 2, "username": null, "email": "bo@x.com", "signup_method": "google", "is_superuser": 0 }
        ]),
    );
    let api = ApiClient::new(&config(), &transport);

    let users = block_on(list_users(&api, Some("jwt"))).unwrap();

    assert_eq!(users.len(), 2);
    assert!(users[0].is_superuser);
    assert_eq!(users[1].username, "");
    assert!(!users[1].is_superuser);
    assert_eq!(users[1].created_at, None);
    assert_eq!(transport.requests()[0].url, format!("{BASE}{USERS_PATH}"));
}

#[test]
fn list_users_forbidden_has_fixed_message() {
    let transport = MockTransport::new().respond(403, json!({ "message": "nope" }));
    let api = ApiClient::new(&config(), &transport);
    let err = block_on(list_users(&api, Some("jwt"))).unwrap_err();
    assert_eq!(err, ApiError::Forbidden(Some("nope".to_owned())));
    assert_eq!(list_failure_message(&err), "Access denied. Superuser privileges required.");
    assert_eq!(list_failure_message(&ApiError::Network("x".to_owned())), "Failed to load users");
}

#[test]
fn delete_user_targets_user_data_path() {
    let transport = MockTransport::new().respond(200, json!({ "message": "deleted" }));
    let api = ApiClient::new(&config(), &transport);

    block_on(delete_user(&api, Some("jwt"), 42)).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].url, format!("{BASE}/api/auth/user/data/42"));
    assert_eq!(sent[0].bearer.as_deref(), Some("jwt"));
}

#[test]
fn delete_failures_map_to_fixed_messages() {
    for (status, expected) in [
        (403, "Access denied. You can only delete your own data or must be a superuser."),
        (404, "User not found"),
        (500, "Failed to delete user"),
    ] {
        let transport = MockTransport::new().respond(status, json!({ "message": "backend text" }));
        let api = ApiClient::new(&config(), &transport);
        let err = block_on(delete_user(&api, Some("jwt"), 7)).unwrap_err();
        assert_eq!(delete_failure_message(&err), expected, "status {status}");
    }
}

#[test]
fn delete_without_token_sends_nothing() {
    let transport = MockTransport::new();
    let api = ApiClient::new(&config(), &transport);
    assert_eq!(block_on(delete_user(&api, None, 1)), Err(ApiError::Unauthorized));
    assert!(transport.requests().is_empty());
}
