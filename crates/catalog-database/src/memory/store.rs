//! In-memory product store.
//!
//! Transactions take the table write lock for their whole lifetime and work
//! on a private copy, so readers either see the state before `begin` or the
//! state after `commit`, never anything in between.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};
use uuid::Uuid;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::product::{Product, ProductImage};

use crate::store::{ProductStore, ProductTransaction};

/// Operations that can be made to fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    /// `ProductStore::insert`.
    Insert,
    /// `ProductStore::find_page`.
    FindPage,
    /// `ProductTransaction::delete_images`.
    DeleteImages,
    /// `ProductTransaction::save_product`.
    SaveProduct,
    /// `ProductTransaction::insert_images`.
    InsertImages,
    /// `ProductTransaction::commit`.
    Commit,
    /// `ProductStore::delete_all`.
    DeleteAll,
}

#[derive(Debug, Default, Clone)]
struct Tables {
    /// Products in creation order, each owning its images.
    products: Vec<Product>,
    /// Last image id handed out.
    last_image_id: i32,
}

impl Tables {
    fn position(&self, id: Uuid) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn ensure_unique(&self, candidate: &Product) -> AppResult<()> {
        for other in self.products.iter().filter(|p| p.id != candidate.id) {
            if other.title == candidate.title {
                return Err(AppError::duplicate_key(format!(
                    "Key (title)=({}) already exists.",
                    candidate.title
                )));
            }
            if other.slug == candidate.slug {
                return Err(AppError::duplicate_key(format!(
                    "Key (slug)=({}) already exists.",
                    candidate.slug
                )));
            }
        }
        Ok(())
    }

    fn build_images(&mut self, product_id: Uuid, urls: &[String]) -> Vec<ProductImage> {
        urls.iter()
            .map(|url| {
                self.last_image_id += 1;
                ProductImage {
                    id: self.last_image_id,
                    url: url.clone(),
                    product_id,
                }
            })
            .collect()
    }
}

/// Product store that keeps everything in process memory.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    tables: Arc<RwLock<Tables>>,
    fail_point: Arc<Mutex<Option<FailPoint>>>,
    released: Arc<AtomicUsize>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call to `point` fail with a database error.
    pub async fn fail_next(&self, point: FailPoint) {
        *self.fail_point.lock().await = Some(point);
    }

    /// Number of transactions that have been committed, rolled back, or dropped.
    pub fn released_transactions(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Number of stored products.
    pub async fn product_count(&self) -> usize {
        self.tables.read().await.products.len()
    }

    /// Number of stored images across all products.
    pub async fn image_count(&self) -> usize {
        self.tables
            .read()
            .await
            .products
            .iter()
            .map(|p| p.images.len())
            .sum()
    }
}

async fn trip(fail_point: &Mutex<Option<FailPoint>>, point: FailPoint) -> AppResult<()> {
    let mut armed = fail_point.lock().await;
    if *armed == Some(point) {
        *armed = None;
        return Err(AppError::database(format!("Injected failure at {point:?}")));
    }
    Ok(())
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &Product, image_urls: &[String]) -> AppResult<Product> {
        let mut tables = self.tables.write().await;
        trip(&self.fail_point, FailPoint::Insert).await?;

        if tables.position(product.id).is_some() {
            return Err(AppError::duplicate_key(format!(
                "Key (id)=({}) already exists.",
                product.id
            )));
        }
        tables.ensure_unique(product)?;

        let mut stored = product.clone();
        stored.images = tables.build_images(stored.id, image_urls);
        tables.products.push(stored.clone());
        Ok(stored)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>> {
        trip(&self.fail_point, FailPoint::FindPage).await?;
        let tables = self.tables.read().await;
        let skip = usize::try_from(offset).unwrap_or(0);
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(tables
            .products
            .iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_term(&self, term: &str) -> AppResult<Option<Product>> {
        let tables = self.tables.read().await;
        let title = term.to_uppercase();
        let slug = term.to_lowercase();
        Ok(tables
            .products
            .iter()
            .find(|p| p.title.to_uppercase() == title || p.slug == slug)
            .cloned())
    }

    async fn begin(&self) -> AppResult<Box<dyn ProductTransaction>> {
        let guard = Arc::clone(&self.tables).write_owned().await;
        let working = (*guard).clone();
        Ok(Box::new(MemoryProductTransaction {
            guard,
            working,
            fail_point: Arc::clone(&self.fail_point),
            released: Arc::clone(&self.released),
            finished: false,
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.position(id) {
            Some(index) => {
                tables.products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        trip(&self.fail_point, FailPoint::DeleteAll).await?;
        let removed = tables.products.len() as u64;
        tables.products.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Transaction over a private copy of the tables.
struct MemoryProductTransaction {
    guard: OwnedRwLockWriteGuard<Tables>,
    working: Tables,
    fail_point: Arc<Mutex<Option<FailPoint>>>,
    released: Arc<AtomicUsize>,
    finished: bool,
}

impl MemoryProductTransaction {
    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn product_mut(&mut self, id: Uuid) -> AppResult<&mut Product> {
        self.working
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Product with {id} not found")))
    }
}

impl Drop for MemoryProductTransaction {
    fn drop(&mut self) {
        self.finish();
    }
}

#[async_trait]
impl ProductTransaction for MemoryProductTransaction {
    async fn delete_images(&mut self, product_id: Uuid) -> AppResult<u64> {
        trip(&self.fail_point, FailPoint::DeleteImages).await?;
        let product = self.product_mut(product_id)?;
        let removed = product.images.len() as u64;
        product.images.clear();
        Ok(removed)
    }

    async fn save_product(&mut self, product: &Product) -> AppResult<()> {
        trip(&self.fail_point, FailPoint::SaveProduct).await?;
        self.working.ensure_unique(product)?;
        let slot = self.product_mut(product.id)?;
        let images = std::mem::take(&mut slot.images);
        *slot = product.clone();
        slot.images = images;
        Ok(())
    }

    async fn insert_images(
        &mut self,
        product_id: Uuid,
        urls: &[String],
    ) -> AppResult<Vec<ProductImage>> {
        trip(&self.fail_point, FailPoint::InsertImages).await?;
        self.product_mut(product_id)?;
        let images = self.working.build_images(product_id, urls);
        self.product_mut(product_id)?.images.extend(images.iter().cloned());
        Ok(images)
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut this = self;
        trip(&this.fail_point, FailPoint::Commit).await?;
        *this.guard = std::mem::take(&mut this.working);
        this.finish();
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let mut this = self;
        this.finish();
        Ok(())
    }
}
