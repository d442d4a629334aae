//! Health Check Handlers
//!
//! Status-probe endpoints. These are pure reporting, not resource
//! operations: they return a fixed-success snapshot with the current UTC
//! time, the resolved host address, process uptime, and the caller's
//! echo strings.
//!
//! # Endpoints
//! - `GET /health?echo=` - status snapshot with an optional query echo
//! - `GET /health/{path_echo}?echo=` - same, plus a path-supplied echo

use axum::{
    extract::{Path, Query},
    Json,
};
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::application::dto::request::HealthQueryParams;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
}

/// Status snapshot returned by the health endpoints
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed success status code
    pub status: u16,

    /// Human-readable status message
    pub status_message: &'static str,

    /// Current UTC timestamp
    pub timestamp: String,

    /// Resolved network address of the serving host
    pub ip_address: String,

    pub uptime_seconds: u64,

    /// Echo string supplied as a query parameter, if any
    pub echo: Option<String>,

    /// Echo string supplied in the URL path, if any
    pub path_echo: Option<String>,
}

async fn snapshot(echo: Option<String>, path_echo: Option<String>) -> HealthResponse {
    HealthResponse {
        status: 200,
        status_message: "OK",
        timestamp: Utc::now().to_rfc3339(),
        ip_address: resolve_host_address().await,
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        echo,
        path_echo,
    }
}

/// Resolve the host's network address, falling back to loopback when the
/// hostname cannot be resolved.
async fn resolve_host_address() -> String {
    let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".into());
    let address = match tokio::net::lookup_host((host.as_str(), 0)).await {
        Ok(mut addrs) => addrs
            .next()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "127.0.0.1".into()),
        Err(_) => "127.0.0.1".into(),
    };
    address
}

/// Status probe without a path echo
pub async fn health(Query(params): Query<HealthQueryParams>) -> Json<HealthResponse> {
    Json(snapshot(params.echo, None).await)
}

/// Status probe with a path-supplied echo
pub async fn health_with_path(
    Path(path_echo): Path<String>,
    Query(params): Query<HealthQueryParams>,
) -> Json<HealthResponse> {
    Json(snapshot(params.echo, Some(path_echo)).await)
}
