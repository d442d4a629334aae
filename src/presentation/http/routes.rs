//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/businesses", business_routes())
        .nest("/products", product_routes())
        // Status probe endpoints
        .route("/health", get(handlers::health::health))
        .route("/health/{path_echo}", get(handlers::health::health_with_path))
        .with_state(state)
}

/// Root welcome message
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Product/Business API."
    }))
}

/// Business resource routes
fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::business::create_business))
        .route("/", get(handlers::business::list_businesses))
        .route("/{ein}", get(handlers::business::get_business))
        .route("/{ein}", patch(handlers::business::update_business))
        .route("/{ein}", delete(handlers::business::delete_business))
}

/// Product resource routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::product::create_product))
        .route("/", get(handlers::product::list_products))
        .route("/{product_id}", get(handlers::product::get_product))
        .route("/{product_id}", patch(handlers::product::update_product))
        .route("/{product_id}", delete(handlers::product::delete_product))
}
