use super::*;
use crate::net::client::mock::{BASE, MockTransport, config};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn fetch_profile_sends_bearer_and_decodes() {
    let transport = MockTransport::new().respond(
        200,
        json!({
            "username": "Ann",
            "email": "ann@x.com",
            "profile_image": null,
            "signup_method": "email",
            "last_login": "2024-05-01T10:00:00Z",
            "about_me": "hi",
            "contact_number": null,
            "company_name": "Technians"
        }),
    );
    let api = ApiClient::new(&config(), &transport);

    let profile = block_on(fetch_profile(&api, Some("jwt"))).unwrap();

    assert_eq!(profile.username, "Ann");
    assert_eq!(profile.about_me.as_deref(), Some("hi"));
    assert_eq!(profile.contact_number, None);
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, format!("{BASE}{PROFILE_PATH}"));
    assert_eq!(sent[0].bearer.as_deref(), Some("jwt"));
    assert_eq!(sent[0].body, None);
}

#[test]
fn fetch_profile_without_token_is_unauthorized() {
    let transport = MockTransport::new();
    let api = ApiClient::new(&config(), &transport);
    assert_eq!(block_on(fetch_profile(&api, None)), Err(ApiError::Unauthorized));
    assert!(transport.requests().is_empty());
}

#[test]
fn fetch_profile_maps_not_found() {
    let transport = MockTransport::new().respond(404, json!({ "message": "User not found" }));
    let api = ApiClient::new(&config(), &transport);
    assert_eq!(
        block_on(fetch_profile(&api, Some("jwt"))),
        Err(ApiError::NotFound(Some("User not found".to_owned())))
    );
}

#[test]
fn update_profile_posts_editable_fields() {
    let transport = MockTransport::new().respond(200, json!({ "message": "Profile updated" }));
    let api = ApiClient::new(&config(), &transport);
    let update = ProfileUpdate {
        about_me: "builder".to_owned(),
        contact_number: "555".to_owned(),
        company_name: String::new(),
    };

    block_on(update_profile(&api, Some("jwt"), &update)).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(json!({ "about_me": "builder", "contact_number": "555", "company_name": "" })));
}

#[test]
fn update_profile_failure_is_reported() {
    let transport = MockTransport::new().respond(500, json!({}));
    let api = ApiClient::new(&config(), &transport);
    let err = block_on(update_profile(&api, Some("jwt"), &ProfileUpdate::default())).unwrap_err();
    assert_eq!(err, ApiError::Unexpected { status: 500, message: None });
}
