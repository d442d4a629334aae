//! Product entity.
//!
//! A product is keyed by a caller-supplied integer id and embeds a value
//! snapshot of the producing business taken at write time. Updating the
//! original business record never changes the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::BusinessProfile;
use crate::domain::store::Resource;
use crate::shared::validation::{validate_name, ValidationError};

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique integer identifying the product. Caller-supplied, no
    /// auto-increment.
    pub product_id: i64,

    /// Product name.
    pub name: String,

    /// Snapshot of the business that produces this product. A value
    /// copy, never a live reference into the business store.
    pub business: BusinessProfile,

    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(product_id: i64, name: String, business: BusinessProfile) -> Self {
        let now = Utc::now();
        Self {
            product_id,
            name,
            business,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Exact-match filter for product list operations. `business_ein` and
/// `business_name` reach into the embedded snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub business_ein: Option<String>,
    pub business_name: Option<String>,
}

/// Partial update for a product; supply only fields to change. The
/// `business` snapshot is replaced wholesale when present and validated
/// under business field rules before being embedded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub business: Option<BusinessProfile>,
}

impl Resource for Product {
    type Key = i64;
    type Filter = ProductFilter;
    type Patch = ProductPatch;

    const KIND: &'static str = "Product";

    fn key(&self) -> i64 {
        self.product_id
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        if let Some(product_id) = filter.product_id {
            if self.product_id != product_id {
                return false;
            }
        }
        if let Some(name) = &filter.name {
            if &self.name != name {
                return false;
            }
        }
        if let Some(business_ein) = &filter.business_ein {
            if &self.business.ein != business_ein {
                return false;
            }
        }
        if let Some(business_name) = &filter.business_name {
            if &self.business.name != business_name {
                return false;
            }
        }
        true
    }

    fn merge(&mut self, patch: ProductPatch) {
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(business) = patch.business {
            self.business = business;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name, "name")?;
        self.business.validate()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
