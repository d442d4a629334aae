//! # Domain Layer
//!
//! Core resource types and the store contract. Independent of the HTTP
//! layer and of any particular store implementation.
//!
//! - **entities**: Business and Product records with their filters and
//!   partial-update payloads
//! - **store**: the shared `ResourceStore` trait and store errors

pub mod entities;
pub mod store;

pub use entities::*;
pub use store::{Resource, ResourceStore, StoreError};
