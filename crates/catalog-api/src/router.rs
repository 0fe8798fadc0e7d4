//! Route definitions for the catalog HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(product_routes())
        .merge(seed_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Product CRUD
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products)
                .post(handlers::product::create_product)
                .delete(handlers::product::delete_all_products),
        )
        .route(
            "/products/{term}",
            get(handlers::product::get_product)
                .patch(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// Demo data
fn seed_routes() -> Router<AppState> {
    Router::new().route("/seed", post(handlers::seed::run_seed))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
