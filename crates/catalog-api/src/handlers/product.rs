//! Product CRUD handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use catalog_core::error::AppError;
use catalog_core::types::pagination::PaginationParams;
use catalog_entity::product::ProductResponse;

use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_uuid};
use crate::state::AppState;

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state.product_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products?limit=&offset=
pub async fn list_products(
    State(state): State<AppState>,
    page: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let Query(page) = page.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let products = state.product_service.find_all(page).await?;
    Ok(Json(products))
}

/// GET /api/products/{term}
pub async fn get_product(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.product_service.find_one_plain(&term).await?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    let product = state.product_service.update(id, req.into()).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_uuid(&id)?;
    state.product_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/products
pub async fn delete_all_products(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.product_service.delete_all_products().await?;
    Ok(StatusCode::NO_CONTENT)
}
