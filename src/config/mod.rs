//! # Configuration Module
//!
//! Application configuration loading and management. Configuration can
//! be loaded from:
//! - Environment variables (prefixed with APP__, plus SERVER_HOST and
//!   SERVER_PORT shortcuts)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)

mod settings;

pub use settings::*;
