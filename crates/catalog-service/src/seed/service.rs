//! Replaces the catalog with the demo products.

use std::sync::Arc;

use tracing::info;

use catalog_core::result::AppResult;

use super::data::demo_products;
use crate::product::ProductService;

/// Loads demo data through the product service.
#[derive(Debug, Clone)]
pub struct SeedService {
    products: Arc<ProductService>,
}

impl SeedService {
    /// Creates a new seed service.
    pub fn new(products: Arc<ProductService>) -> Self {
        Self { products }
    }

    /// Deletes every product, then inserts the demo set.
    ///
    /// Subject to the same bulk-delete switch as
    /// [`ProductService::delete_all_products`]. Returns the number inserted.
    pub async fn run(&self) -> AppResult<usize> {
        self.products.delete_all_products().await?;

        let mut inserted = 0;
        for input in demo_products() {
            self.products.create(input).await?;
            inserted += 1;
        }

        tracing::dispatcher::with_default(self.products.logger(), || {
            info!(inserted, "Seed executed");
        });
        Ok(inserted)
    }
}
