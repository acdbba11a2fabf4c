mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use memotag_site::api::handlers::contact_handler;
use serde_json::json;

fn test_server(state: memotag_site::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/contact", post(contact_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_contact_accepts_a_valid_lead() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jo",
            "email": "jo@example.com",
            "message": "Hello there, I have a question."
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "accepted");

    let leads = store.leads();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Jo");
    assert_eq!(leads[0].email, "jo@example.com");
    assert_eq!(leads[0].message, "Hello there, I have a question.");
}

#[tokio::test]
async fn test_contact_trims_the_name() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    server
        .post("/api/contact")
        .json(&json!({
            "name": "  Jo  ",
            "email": "jo@example.com",
            "message": "Hello there, I have a question."
        }))
        .await
        .assert_status_ok();

    assert_eq!(store.leads()[0].name, "Jo");
}

#[tokio::test]
async fn test_contact_rejects_a_short_name() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "J",
            "email": "jo@example.com",
            "message": "Hello there, I have a question."
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["fields"]["name"].is_array());

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_contact_rejects_a_whitespace_padded_name() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "  J  ",
            "email": "jo@example.com",
            "message": "Hello there, I have a question."
        }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_contact_rejects_an_invalid_email() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jo",
            "email": "not-an-email",
            "message": "Hello there, I have a question."
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body["error"]["details"]["fields"]["email"].is_array());

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_contact_rejects_a_short_message() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jo",
            "email": "jo@example.com",
            "message": "too short"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body["error"]["details"]["fields"]["message"].is_array());

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_contact_reports_all_field_errors_at_once() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "",
            "email": "nope",
            "message": "short"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    let fields = body["error"]["details"]["fields"].as_object().unwrap();
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("message"));

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_contact_store_failure_is_an_opaque_submit_error() {
    let (state, store) = common::create_failing_state();
    let server = test_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jo",
            "email": "jo@example.com",
            "message": "Hello there, I have a question."
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "submit_error");
    assert_eq!(
        body["error"]["message"],
        "Could not send message. Please try again."
    );

    assert!(store.is_empty());
}
