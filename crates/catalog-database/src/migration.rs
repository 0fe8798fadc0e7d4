//! Embedded schema migrations for the catalog tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;

/// Files under the workspace `migrations/` directory, compiled in.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the products schema up to date.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(available = MIGRATOR.iter().count(), "Applying catalog schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Catalog schema migration failed", e)
    })?;

    info!("Catalog schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_migration_is_embedded() {
        assert!(
            MIGRATOR
                .iter()
                .any(|m| m.description.contains("create products"))
        );
    }
}
