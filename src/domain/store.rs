//! Resource store contract.
//!
//! Business and Product stores share one create/list/get/update/delete
//! contract. The record type describes its own key, filter, and partial
//! update semantics through the [`Resource`] trait; store implementations
//! stay generic over it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::validation::ValidationError;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// A record that can live in a [`ResourceStore`].
///
/// Implementors define their natural key, the exact-match filter applied
/// by list operations, and the field-level merge used by partial updates.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Natural unique key.
    type Key: Eq + Hash + Clone + Debug + Display + Send + Sync;

    /// Exact-match filter for list operations. `Default` is the empty
    /// filter matching every record.
    type Filter: Default + Send + Sync;

    /// Partial update payload. Absent fields preserve stored values.
    type Patch: Send + Sync;

    /// Human-readable kind name used in error messages.
    const KIND: &'static str;

    /// The record's current key value.
    fn key(&self) -> Self::Key;

    /// Whether every predicate present in the filter matches exactly.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Overwrite each field present in the patch, preserving the rest.
    fn merge(&mut self, patch: Self::Patch);

    /// Validate the complete record, returning the first failing field.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Stamp both timestamps at creation.
    fn stamp_created(&mut self, at: DateTime<Utc>);

    /// Refresh `updated_at` after a successful update.
    fn stamp_updated(&mut self, at: DateTime<Utc>);
}

/// Shared store contract over any [`Resource`].
///
/// Each method is atomic with respect to the others: implementations must
/// hold the record under mutual exclusion for the full operation, including
/// the merge and re-validation phase of `update`.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Insert a new record. Fails with `Conflict` if the key exists.
    async fn create(&self, record: R) -> Result<R, StoreError>;

    /// All records matching the filter, in unspecified order.
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError>;

    /// Look up a record by key.
    async fn get(&self, key: &R::Key) -> Result<R, StoreError>;

    /// Merge a partial payload onto the stored record, re-validate the
    /// whole, and store the result.
    async fn update(&self, key: &R::Key, patch: R::Patch) -> Result<R, StoreError>;

    /// Remove a record permanently. No tombstone is kept.
    async fn delete(&self, key: &R::Key) -> Result<(), StoreError>;
}
