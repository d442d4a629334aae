//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn health_returns_fixed_success_snapshot() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["status_message"], "OK");
    assert!(body["timestamp"].is_string());
    assert!(body["ip_address"].is_string());
    assert!(body["echo"].is_null());
    assert!(body["path_echo"].is_null());
}

#[tokio::test]
async fn health_echoes_query_parameter() {
    let app = TestApp::new();

    let body = body_json(app.get("/health?echo=hello").await).await;
    assert_eq!(body["echo"], "hello");
    assert!(body["path_echo"].is_null());
}

#[tokio::test]
async fn health_echoes_path_and_query_together() {
    let app = TestApp::new();

    let body = body_json(app.get("/health/world?echo=hi").await).await;
    assert_eq!(body["echo"], "hi");
    assert_eq!(body["path_echo"], "world");
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("Product/Business API"));
}
