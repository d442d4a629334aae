//! Common Test Utilities
//!
//! Shared helpers and test infrastructure. Every `TestApp` owns a fresh
//! in-memory state, so tests are fully isolated from each other.

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use catalog_server::config::Settings;
use catalog_server::presentation::http::routes;
use catalog_server::startup::AppState;

/// Test application wrapping the real router with fresh stores
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(Settings::default());
        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PATCH request with JSON body
    pub async fn patch_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// JSON payload for Ashley's Cupcakes, the canonical test business
pub const CUPCAKES_BUSINESS: &str = r#"{
    "ein": "12-3456789",
    "name": "Ashley's Cupcakes",
    "email": "ashleyscupcakes@example.com",
    "phone": "+1-212-555-0199"
}"#;

/// JSON payload for the canonical test product
pub const VANILLA_CUPCAKE: &str = r#"{
    "product_id": 0,
    "name": "Vanilla Cupcake",
    "business": {
        "ein": "12-3456789",
        "name": "Ashley's Cupcakes",
        "email": "ashleyscupcakes@example.com",
        "phone": "+1-212-555-0199"
    }
}"#;
