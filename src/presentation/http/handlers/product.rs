//! Product Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    CreateProductRequest, ProductQueryParams, UpdateProductRequest,
};
use crate::application::dto::response::ProductResponse;
use crate::domain::entities::Product;
use crate::domain::store::ResourceStore;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn parse_product_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let (product_id, name, business) = body.into_parts()?;
    let created = state
        .products
        .create(Product::new(product_id, name, business))
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(created))))
}

/// List products matching the supplied exact-match filters
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.products.list(&params.into()).await?;

    let responses: Vec<ProductResponse> =
        products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(responses))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product_id = parse_product_id(&product_id)?;
    let product = state.products.get(&product_id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Partially update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product_id = parse_product_id(&product_id)?;
    let patch = body.into_patch()?;
    let updated = state.products.update(&product_id, patch).await?;

    Ok(Json(ProductResponse::from(updated)))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let product_id = parse_product_id(&product_id)?;
    state.products.delete(&product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
