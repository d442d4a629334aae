//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod business;
pub mod health;
pub mod product;
