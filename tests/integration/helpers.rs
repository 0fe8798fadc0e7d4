//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;
use tracing::Dispatch;

use catalog_core::config::AppConfig;
use catalog_database::store::ProductStore;
use catalog_database::{DatabasePool, MemoryProductStore, PgProductStore};

/// Serialises the PostgreSQL tests, which share one database.
static PG_LOCK: Mutex<()> = Mutex::const_new(());

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Held for the lifetime of a PostgreSQL-backed app
    _pg_guard: Option<MutexGuard<'static, ()>>,
}

impl TestApp {
    /// App over an empty in-memory store
    pub fn memory(allow_bulk_delete: bool) -> Self {
        Self::memory_with(MemoryProductStore::new(), allow_bulk_delete)
    }

    /// App over a caller-held memory store, for arming fail points
    pub fn memory_with(store: MemoryProductStore, allow_bulk_delete: bool) -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.catalog.allow_bulk_delete = allow_bulk_delete;

        Self::with_store(config, Arc::new(store), None)
    }

    /// App over the database in `DATABASE_URL`, emptied first
    pub async fn postgres() -> Self {
        let guard = PG_LOCK.lock().await;

        let mut config = AppConfig::default();
        config.database.url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for PostgreSQL tests");
        config.catalog.allow_bulk_delete = true;

        let pool = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        catalog_database::migration::run_migrations(pool.pool())
            .await
            .expect("Failed to run migrations");
        sqlx::query("DELETE FROM products")
            .execute(pool.pool())
            .await
            .expect("Failed to clean products");

        let store = Arc::new(PgProductStore::new(pool.into_pool()));
        Self::with_store(config, store, Some(guard))
    }

    fn with_store(
        config: AppConfig,
        store: Arc<dyn ProductStore>,
        guard: Option<MutexGuard<'static, ()>>,
    ) -> Self {
        let state = catalog_api::build_state(config, store, Dispatch::none());
        Self {
            router: catalog_api::build_app(state),
            _pg_guard: guard,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a product and return its JSON representation
    pub async fn create_product(&self, title: &str, images: &[&str]) -> Value {
        let response = self
            .request(
                "POST",
                "/api/products",
                Some(serde_json::json!({
                    "title": title,
                    "price": 20.5,
                    "sizes": ["S", "M"],
                    "gender": "women",
                    "images": images,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body
    }
}

/// Parsed test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
