//! In-memory resource store.
//!
//! One `MemoryStore` instance backs each resource type, constructed once
//! at startup and shared through application state. State is
//! process-lifetime only; nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::store::{Resource, ResourceStore, StoreError};

/// `ResourceStore` backed by a map under a read-write lock.
///
/// The lock is held for the whole of each operation, including the
/// merge-and-revalidate phase of `update`, so concurrent requests never
/// observe a torn record or lose an update. No await happens while a
/// guard is held.
pub struct MemoryStore<R: Resource> {
    records: RwLock<HashMap<R::Key, R>>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn create(&self, mut record: R) -> Result<R, StoreError> {
        let mut records = self.records.write();
        let key = record.key();

        if records.contains_key(&key) {
            return Err(StoreError::Conflict(format!(
                "{} with key {} already exists",
                R::KIND,
                key
            )));
        }

        record.validate()?;
        record.stamp_created(Utc::now());
        records.insert(key.clone(), record.clone());

        tracing::debug!(kind = R::KIND, key = %key, "record created");
        Ok(record)
    }

    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError> {
        // Linear scan by design; no index structures at this scale.
        let records = self.records.read();
        Ok(records
            .values()
            .filter(|record| record.matches(filter))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &R::Key) -> Result<R, StoreError> {
        let records = self.records.read();
        records
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("{} not found", R::KIND)))
    }

    async fn update(&self, key: &R::Key, patch: R::Patch) -> Result<R, StoreError> {
        let mut records = self.records.write();

        let stored = records
            .get(key)
            .ok_or_else(|| StoreError::NotFound(format!("{} not found", R::KIND)))?;

        let mut merged = stored.clone();
        merged.merge(patch);
        merged.validate()?;

        // A patch may change the key field itself. Re-keying onto another
        // existing record would silently overwrite it, so reject that.
        let new_key = merged.key();
        if new_key != *key && records.contains_key(&new_key) {
            return Err(StoreError::Conflict(format!(
                "{} with key {} already exists",
                R::KIND,
                new_key
            )));
        }

        merged.stamp_updated(Utc::now());
        records.remove(key);
        records.insert(new_key.clone(), merged.clone());

        tracing::debug!(kind = R::KIND, key = %new_key, "record updated");
        Ok(merged)
    }

    async fn delete(&self, key: &R::Key) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records.remove(key) {
            Some(_) => {
                tracing::debug!(kind = R::KIND, key = %key, "record deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("{} not found", R::KIND))),
        }
    }
}
