//! Product catalog operations.

use std::sync::Arc;

use tracing::{Dispatch, info, warn};
use uuid::Uuid;

use catalog_core::config::CatalogConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::types::pagination::PaginationParams;
use catalog_database::store::{ProductStore, ProductTransaction};
use catalog_entity::product::{CreateProduct, Product, ProductResponse, UpdateProduct};

use super::errors::classify;

/// Creates, reads, updates and deletes catalog products.
///
/// All log output goes to the dispatcher passed in at construction.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Product store.
    store: Arc<dyn ProductStore>,
    /// Catalog switches.
    catalog: CatalogConfig,
    /// Where this service writes its logs.
    logger: Dispatch,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(store: Arc<dyn ProductStore>, catalog: CatalogConfig, logger: Dispatch) -> Self {
        Self {
            store,
            catalog,
            logger,
        }
    }

    /// The dispatcher this service logs to.
    pub fn logger(&self) -> &Dispatch {
        &self.logger
    }

    fn log(&self, f: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.logger, f);
    }

    /// Shared error classification; see [`classify`].
    pub fn handle_db_error(&self, err: AppError) -> AppError {
        classify(&self.logger, err)
    }

    /// Creates a product with one image per URL.
    pub async fn create(&self, input: CreateProduct) -> AppResult<ProductResponse> {
        let (product, image_urls) = Product::from_create(input);
        ensure_slug(&product)?;

        let stored = self
            .store
            .insert(&product, &image_urls)
            .await
            .map_err(|e| self.handle_db_error(e))?;

        self.log(|| {
            info!(
                product_id = %stored.id,
                slug = %stored.slug,
                images = stored.images.len(),
                "Product created"
            );
        });
        Ok(stored.into())
    }

    /// Lists one page of products in creation order.
    pub async fn find_all(&self, page: PaginationParams) -> AppResult<Vec<ProductResponse>> {
        let products = self
            .store
            .find_page(page.sql_limit(), page.sql_offset())
            .await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Looks a product up by id, or by title (any case) or slug.
    pub async fn find_one(&self, term: &str) -> AppResult<Product> {
        let found = match Uuid::parse_str(term) {
            Ok(id) => self.store.find_by_id(id).await?,
            Err(_) => self.store.find_by_term(term).await?,
        };
        found.ok_or_else(|| AppError::not_found(format!("Product with {term} not found")))
    }

    /// [`find_one`](Self::find_one), flattened.
    pub async fn find_one_plain(&self, term: &str) -> AppResult<ProductResponse> {
        self.find_one(term).await.map(ProductResponse::from)
    }

    /// Applies a partial update, replacing the image set when one is given.
    ///
    /// The scalar merge happens before the transaction opens. Image removal,
    /// the product save and image insertion then run in one transaction that
    /// is either committed or rolled back.
    pub async fn update(&self, id: Uuid, changes: UpdateProduct) -> AppResult<ProductResponse> {
        let mut product = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| self.handle_db_error(e))?
            .ok_or_else(|| AppError::not_found(format!("Product with {id} not found")))?;
        let images = product.merge(changes);
        ensure_slug(&product)?;

        let mut tx = self
            .store
            .begin()
            .await
            .map_err(|e| self.handle_db_error(e))?;

        match write_update(tx.as_mut(), &product, images.as_deref()).await {
            Ok(()) => {
                tx.commit().await.map_err(|e| self.handle_db_error(e))?;
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    self.log(|| warn!(product_id = %id, error = %rollback_err, "Rollback failed"));
                }
                return Err(self.handle_db_error(err));
            }
        }

        self.log(|| info!(product_id = %id, images_replaced = images.is_some(), "Product updated"));
        self.find_one_plain(&id.to_string()).await
    }

    /// Deletes a product and its images.
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        let product = self.find_one(&id.to_string()).await?;
        self.store.delete(product.id).await?;
        self.log(|| info!(product_id = %id, "Product removed"));
        Ok(())
    }

    /// Deletes every product. Refused unless bulk delete is enabled.
    pub async fn delete_all_products(&self) -> AppResult<u64> {
        if !self.catalog.allow_bulk_delete {
            self.log(|| warn!("Bulk delete refused: catalog.allow_bulk_delete is off"));
            return Err(AppError::forbidden("Bulk delete is disabled"));
        }

        let removed = self
            .store
            .delete_all()
            .await
            .map_err(|e| self.handle_db_error(e))?;
        self.log(|| info!(removed, "All products deleted"));
        Ok(removed)
    }
}

/// A slug made only of apostrophes normalises to nothing.
fn ensure_slug(product: &Product) -> AppResult<()> {
    if product.slug.is_empty() {
        return Err(AppError::validation(
            "slug must contain a character other than an apostrophe",
        ));
    }
    Ok(())
}

async fn write_update(
    tx: &mut dyn ProductTransaction,
    product: &Product,
    images: Option<&[String]>,
) -> AppResult<()> {
    if images.is_some() {
        tx.delete_images(product.id).await?;
    }
    tx.save_product(product).await?;
    if let Some(urls) = images {
        tx.insert_images(product.id, urls).await?;
    }
    Ok(())
}
