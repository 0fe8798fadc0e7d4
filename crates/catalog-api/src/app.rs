//! Application builder: wires state, router and outer layers into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Dispatch;

use catalog_core::config::AppConfig;
use catalog_database::store::ProductStore;
use catalog_service::product::ProductService;
use catalog_service::seed::SeedService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the services on top of `store` and bundles them into [`AppState`].
///
/// `logger` is handed to the services; it is usually the dispatcher
/// installed by `main`.
pub fn build_state(config: AppConfig, store: Arc<dyn ProductStore>, logger: Dispatch) -> AppState {
    let product_service = Arc::new(ProductService::new(
        Arc::clone(&store),
        config.catalog.clone(),
        logger,
    ));
    let seed_service = Arc::new(SeedService::new(Arc::clone(&product_service)));

    AppState {
        config: Arc::new(config),
        store,
        product_service,
        seed_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
