//! Response DTOs
//!
//! Data structures for API response bodies. Timestamps are rendered as
//! RFC 3339 strings.

use serde::Serialize;

use crate::domain::entities::{Business, BusinessProfile, Product};

/// Business response
#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub ein: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            ein: business.profile.ein,
            name: business.profile.name,
            email: business.profile.email,
            phone: business.profile.phone,
            created_at: business.created_at.to_rfc3339(),
            updated_at: business.updated_at.to_rfc3339(),
        }
    }
}

/// Embedded business snapshot as rendered inside a product.
#[derive(Debug, Serialize)]
pub struct BusinessSnapshotResponse {
    pub ein: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<BusinessProfile> for BusinessSnapshotResponse {
    fn from(profile: BusinessProfile) -> Self {
        Self {
            ein: profile.ein,
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
        }
    }
}

/// Product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product_id: i64,
    pub name: String,
    pub business: BusinessSnapshotResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            business: product.business.into(),
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}
