//! Application Layer
//!
//! Data transfer objects bridging the presentation layer and the domain.

pub mod dto;
