//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::store::ProductStore;
use catalog_service::product::ProductService;
use catalog_service::seed::SeedService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Product store, for health checks.
    pub store: Arc<dyn ProductStore>,
    /// Product use cases.
    pub product_service: Arc<ProductService>,
    /// Demo data loader.
    pub seed_service: Arc<SeedService>,
}
