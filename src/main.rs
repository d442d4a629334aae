//! # Catalog Server
//!
//! A demonstration Business/Product CRUD API with in-memory storage.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - In-memory resource stores
//! - HTTP server

use anyhow::Result;
use tracing::info;

use catalog_server::config::Settings;
use catalog_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    catalog_server::telemetry::init_tracing();

    info!("Starting Catalog Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
