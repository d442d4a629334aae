//! Business Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    BusinessQueryParams, CreateBusinessRequest, UpdateBusinessRequest,
};
use crate::application::dto::response::BusinessResponse;
use crate::domain::entities::Business;
use crate::domain::store::ResourceStore;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a new business
pub async fn create_business(
    State(state): State<AppState>,
    Json(body): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<BusinessResponse>), AppError> {
    let profile = body.into_profile()?;
    let created = state.businesses.create(Business::new(profile)).await?;

    Ok((StatusCode::CREATED, Json(BusinessResponse::from(created))))
}

/// List businesses matching the supplied exact-match filters
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(params): Query<BusinessQueryParams>,
) -> Result<Json<Vec<BusinessResponse>>, AppError> {
    let businesses = state.businesses.list(&params.into()).await?;

    let responses: Vec<BusinessResponse> =
        businesses.into_iter().map(BusinessResponse::from).collect();
    Ok(Json(responses))
}

/// Get business by EIN
pub async fn get_business(
    State(state): State<AppState>,
    Path(ein): Path<String>,
) -> Result<Json<BusinessResponse>, AppError> {
    let business = state.businesses.get(&ein).await?;

    Ok(Json(BusinessResponse::from(business)))
}

/// Partially update a business
pub async fn update_business(
    State(state): State<AppState>,
    Path(ein): Path<String>,
    Json(body): Json<UpdateBusinessRequest>,
) -> Result<Json<BusinessResponse>, AppError> {
    let updated = state.businesses.update(&ein, body.into()).await?;

    Ok(Json(BusinessResponse::from(updated)))
}

/// Delete a business
pub async fn delete_business(
    State(state): State<AppState>,
    Path(ein): Path<String>,
) -> Result<StatusCode, AppError> {
    state.businesses.delete(&ein).await?;

    Ok(StatusCode::NO_CONTENT)
}
