mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use memotag_site::api::handlers::health_handler;

fn test_server(state: memotag_site::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_healthy_with_a_reachable_store() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degrades_when_the_store_probe_fails() {
    let (state, _store) = common::create_failing_state();
    let server = test_server(state);

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}
