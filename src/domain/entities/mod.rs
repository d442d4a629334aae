//! # Domain Entities
//!
//! The two resource types served by the catalog:
//!
//! - **Business**: keyed by EIN, with validated contact fields.
//! - **Product**: keyed by a caller-supplied integer id, embedding a
//!   value snapshot of its producing business.
//!
//! Each entity implements [`Resource`](crate::domain::store::Resource),
//! which carries its key, filter, merge, and validation behavior into
//! the shared store contract.

mod business;
mod product;

use serde::{Deserialize, Deserializer};

pub use business::{Business, BusinessFilter, BusinessPatch, BusinessProfile};
pub use product::{Product, ProductFilter, ProductPatch};

/// Deserializer for nullable patch fields. A key that is present with a
/// `null` value becomes `Some(None)` (clear the field), while an absent
/// key stays `None` via `#[serde(default)]` (preserve the field).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
