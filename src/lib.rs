//! # Catalog Server Library
//!
//! A demonstration CRUD API exposing two related resource types,
//! Business and Product, backed by process-local, non-persistent
//! storage:
//!
//! - RESTful HTTP API endpoints for both resources
//! - Exact-match list filtering with AND semantics
//! - Partial updates with fields-present merge semantics
//! - Status-probe endpoints with echo reporting
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer**: Resource entities and the store contract
//! - **Application Layer**: Request/response DTOs
//! - **Infrastructure Layer**: In-memory store implementation
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! catalog_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, filters, patches, store contract
//! +-- application/    Request and response DTOs
//! +-- infrastructure/ In-memory store
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core resource logic
pub mod domain;

// Application layer - DTOs
pub mod application;

// Infrastructure layer - Store implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
