//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use catalog_core::config::DatabaseConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryProductStore;
use crate::migration::run_migrations;
use crate::repositories::PgProductStore;
use crate::store::ProductStore;

/// Build the product store named by `config.provider`.
///
/// For `"postgres"` this connects the pool and, unless disabled, runs the
/// embedded migrations before returning.
pub async fn connect_store(config: &DatabaseConfig) -> AppResult<Arc<dyn ProductStore>> {
    let store: Arc<dyn ProductStore> = match config.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL product store");
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                run_migrations(pool.pool()).await?;
            }
            Arc::new(PgProductStore::new(pool.into_pool()))
        }
        "memory" => {
            info!("Initializing in-memory product store");
            Arc::new(MemoryProductStore::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            )));
        }
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ErrorKind;

    #[tokio::test]
    async fn test_memory_provider() {
        let config = DatabaseConfig {
            provider: "memory".to_string(),
            ..Default::default()
        };
        let store = connect_store(&config).await.unwrap();
        assert!(store.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let config = DatabaseConfig {
            provider: "sqlite".to_string(),
            ..Default::default()
        };
        let err = connect_store(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
