//! Request DTOs
//!
//! Data structures for API request bodies and query strings.
//!
//! Create payloads deserialize every field as optional so that a missing
//! required field surfaces as a `MissingField` validation error rather
//! than a generic body rejection. Update payloads keep fields-present
//! semantics: an omitted field preserves the stored value.

use serde::Deserialize;

use crate::domain::entities::{
    double_option, BusinessFilter, BusinessPatch, BusinessProfile, ProductFilter, ProductPatch,
};
use crate::shared::validation::ValidationError;

/// Creation payload for a Business.
#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub ein: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CreateBusinessRequest {
    /// Check required fields are present and build the profile. Format
    /// rules are enforced later by the store, on the complete record.
    pub fn into_profile(self) -> Result<BusinessProfile, ValidationError> {
        Ok(BusinessProfile {
            ein: self.ein.ok_or(ValidationError::MissingField { field: "ein" })?,
            name: self.name.ok_or(ValidationError::MissingField { field: "name" })?,
            email: self.email.ok_or(ValidationError::MissingField { field: "email" })?,
            phone: self.phone,
        })
    }
}

/// Partial update for a Business; supply only fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateBusinessRequest {
    pub ein: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
}

impl From<UpdateBusinessRequest> for BusinessPatch {
    fn from(body: UpdateBusinessRequest) -> Self {
        Self {
            ein: body.ein,
            name: body.name,
            email: body.email,
            phone: body.phone,
        }
    }
}

/// Business list query parameters; each is an exact-match predicate.
#[derive(Debug, Default, Deserialize)]
pub struct BusinessQueryParams {
    pub ein: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<BusinessQueryParams> for BusinessFilter {
    fn from(params: BusinessQueryParams) -> Self {
        Self {
            ein: params.ein,
            name: params.name,
            email: params.email,
            phone: params.phone,
        }
    }
}

/// Creation payload for a Product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub business: Option<CreateBusinessRequest>,
}

impl CreateProductRequest {
    pub fn into_parts(self) -> Result<(i64, String, BusinessProfile), ValidationError> {
        let product_id = self
            .product_id
            .ok_or(ValidationError::MissingField { field: "product_id" })?;
        let name = self.name.ok_or(ValidationError::MissingField { field: "name" })?;
        let business = self
            .business
            .ok_or(ValidationError::MissingField { field: "business" })?
            .into_profile()?;
        Ok((product_id, name, business))
    }
}

/// Partial update for a Product. A present `business` replaces the
/// embedded snapshot wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub business: Option<CreateBusinessRequest>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> Result<ProductPatch, ValidationError> {
        Ok(ProductPatch {
            product_id: self.product_id,
            name: self.name,
            business: self.business.map(CreateBusinessRequest::into_profile).transpose()?,
        })
    }
}

/// Product list query parameters. `business_ein` and `business_name`
/// filter on the embedded business snapshot.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQueryParams {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub business_ein: Option<String>,
    pub business_name: Option<String>,
}

impl From<ProductQueryParams> for ProductFilter {
    fn from(params: ProductQueryParams) -> Self {
        Self {
            product_id: params.product_id,
            name: params.name,
            business_ein: params.business_ein,
            business_name: params.business_name,
        }
    }
}

/// Health probe query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HealthQueryParams {
    pub echo: Option<String>,
}
