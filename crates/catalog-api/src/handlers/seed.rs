//! Seed handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::SeedResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/seed
pub async fn run_seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let inserted = state.seed_service.run().await?;
    Ok(Json(SeedResponse { inserted }))
}
