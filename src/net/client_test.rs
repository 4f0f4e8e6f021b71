use super::mock::{BASE, MockTransport, config};
use super::*;
use futures::executor::block_on;
use serde_json::json;

fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse { status, body: body.to_owned() }
}

#[test]
fn url_joins_base_and_path() {
    let api = ApiClient::new(&config(), MockTransport::new());
    assert_eq!(api.url("/api/todos"), format!("{BASE}/api/todos"));
}

#[test]
fn send_builds_request_with_bearer_and_json_body() {
    let transport = MockTransport::new().respond(200, json!({}));
    let api = ApiClient::new(&config(), &transport);
    let resp = block_on(api.send(Method::Post, "/api/todos", Some("tok"), Some(&json!({ "title": "a" })))).unwrap();
    assert_eq!(resp.status, 200);

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, format!("{BASE}/api/todos"));
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    assert_eq!(sent[0].body, Some(json!({ "title": "a" })));
}

#[test]
fn send_passes_error_statuses_through() {
    let transport = MockTransport::new().respond(500, json!({ "message": "boom" }));
    let api = ApiClient::new(&config(), &transport);
    let resp = block_on(api.send::<()>(Method::Get, "/x", None, None)).unwrap();
    assert!(!resp.is_success());
}

#[test]
fn send_propagates_transport_failure() {
    let transport = MockTransport::new().fail(ApiError::Network("offline".to_owned()));
    let api = ApiClient::new(&config(), &transport);
    let err = block_on(api.send::<()>(Method::Get, "/x", None, None)).unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_owned()));
}

#[test]
fn server_message_reads_message_field_only() {
    assert_eq!(server_message(r#"{"message":"Email taken"}"#).as_deref(), Some("Email taken"));
    assert_eq!(server_message(r#"{"message":""}"#), None);
    assert_eq!(server_message(r#"{"error":"x"}"#), None);
    assert_eq!(server_message("<html>"), None);
}

#[test]
fn auth_rejection_maps_client_errors_to_variant() {
    let err = auth_rejection(&response(401, r#"{"message":"Wrong password"}"#), ApiError::InvalidCredentials);
    assert_eq!(err, ApiError::InvalidCredentials(Some("Wrong password".to_owned())));
}

#[test]
fn auth_rejection_treats_server_errors_as_unexpected() {
    let err = auth_rejection(&response(503, ""), ApiError::InvalidCredentials);
    assert_eq!(err, ApiError::Unexpected { status: 503, message: None });
}

#[test]
fn resource_rejection_maps_known_statuses() {
    assert_eq!(resource_rejection(&response(401, "")), ApiError::Unauthorized);
    assert_eq!(resource_rejection(&response(403, "{}")), ApiError::Forbidden(None));
    assert_eq!(
        resource_rejection(&response(404, r#"{"message":"gone"}"#)),
        ApiError::NotFound(Some("gone".to_owned()))
    );
    assert_eq!(resource_rejection(&response(409, "")), ApiError::Unexpected { status: 409, message: None });
}

#[test]
fn decode_reports_shape_mismatch() {
    let err = decode::<Vec<i64>>(&response(200, r#"{"a":1}"#)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn require_bearer_rejects_missing_and_empty_tokens() {
    assert_eq!(require_bearer(Some("tok")), Ok("tok"));
    assert_eq!(require_bearer(Some("")), Err(ApiError::Unauthorized));
    assert_eq!(require_bearer(None), Err(ApiError::Unauthorized));
}
