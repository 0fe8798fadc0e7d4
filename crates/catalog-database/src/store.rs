//! Persistence contract for the product aggregate.
//!
//! Parents and children are written in explicit steps: a product row is
//! saved, then its image rows are deleted or inserted. No backend relies on
//! cascade-on-save behaviour.

use async_trait::async_trait;
use uuid::Uuid;

use catalog_core::result::AppResult;
use catalog_entity::product::{Product, ProductImage};

/// Storage backend for products and their images.
#[async_trait]
pub trait ProductStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new product and one image per URL, atomically.
    ///
    /// Returns the stored product with its images attached.
    async fn insert(&self, product: &Product, image_urls: &[String]) -> AppResult<Product>;

    /// Page through products in creation order, images attached.
    async fn find_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>>;

    /// Find a product by id. Images are loaded by a follow-up query.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find a product whose title matches `term` ignoring case, or whose
    /// slug equals the lowercased `term`. Images attached.
    async fn find_by_term(&self, term: &str) -> AppResult<Option<Product>>;

    /// Open a transaction for a multi-statement write.
    async fn begin(&self) -> AppResult<Box<dyn ProductTransaction>>;

    /// Delete a product; its images go with it. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Delete every product. Returns the number of products removed.
    async fn delete_all(&self) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// An open write transaction.
///
/// `commit` and `rollback` consume the handle, so the underlying connection
/// is released exactly once. Dropping an unfinished handle rolls back.
#[async_trait]
pub trait ProductTransaction: Send {
    /// Remove every image owned by `product_id`. Returns the number removed.
    async fn delete_images(&mut self, product_id: Uuid) -> AppResult<u64>;

    /// Write all scalar columns of an existing product.
    async fn save_product(&mut self, product: &Product) -> AppResult<()>;

    /// Attach one image per URL to `product_id`, preserving order.
    async fn insert_images(
        &mut self,
        product_id: Uuid,
        urls: &[String],
    ) -> AppResult<Vec<ProductImage>>;

    /// Make every change visible.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard every change.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
