//! PostgreSQL product store.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::product::{Product, ProductImage};

use crate::error::map_sqlx_error;
use crate::store::{ProductStore, ProductTransaction};

/// Product store backed by a sqlx PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

/// One row of the product/image left join.
#[derive(Debug, FromRow)]
struct ProductImageJoinRow {
    #[sqlx(flatten)]
    product: Product,
    image_id: Option<i32>,
    image_url: Option<String>,
}

impl PgProductStore {
    /// Create a new product store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load images for `products` with one query and attach them in id order.
    async fn attach_images(&self, products: &mut [Product]) -> AppResult<()> {
        if products.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let images = sqlx::query_as::<_, ProductImage>(
            "SELECT id, url, product_id FROM product_images \
             WHERE product_id = ANY($1) ORDER BY id ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to load product images", e))?;

        let index: HashMap<Uuid, usize> = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        for image in images {
            if let Some(&i) = index.get(&image.product_id) {
                products[i].images.push(image);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &Product, image_urls: &[String]) -> AppResult<Product> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Failed to begin transaction", e))?;

        let mut stored = sqlx::query_as::<_, Product>(
            "INSERT INTO products \
             (id, title, price, description, slug, stock, sizes, gender, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender)
        .bind(&product.tags)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert product", e))?;

        stored.images = insert_images(&mut tx, stored.id, image_urls).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Failed to commit product insert", e))?;

        Ok(stored)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>> {
        let mut products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list products", e))?;

        self.attach_images(&mut products).await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find product", e))?;

        let Some(product) = product else {
            return Ok(None);
        };
        let mut found = [product];
        self.attach_images(&mut found).await?;
        let [product] = found;
        Ok(Some(product))
    }

    async fn find_by_term(&self, term: &str) -> AppResult<Option<Product>> {
        let rows = sqlx::query_as::<_, ProductImageJoinRow>(
            "SELECT p.*, pi.id AS image_id, pi.url AS image_url \
             FROM products p \
             LEFT JOIN product_images pi ON pi.product_id = p.id \
             WHERE UPPER(p.title) = UPPER($1) OR p.slug = LOWER($1) \
             ORDER BY p.created_at ASC, p.id ASC, pi.id ASC",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find product by term", e))?;

        let mut rows = rows.into_iter();
        let Some(first) = rows.next() else {
            return Ok(None);
        };

        let mut product = first.product;
        let product_id = product.id;
        let joined = std::iter::once((first.image_id, first.image_url)).chain(
            rows.filter(|row| row.product.id == product_id)
                .map(|row| (row.image_id, row.image_url)),
        );
        for (image_id, image_url) in joined {
            if let (Some(id), Some(url)) = (image_id, image_url) {
                product.images.push(ProductImage {
                    id,
                    url,
                    product_id,
                });
            }
        }
        Ok(Some(product))
    }

    async fn begin(&self) -> AppResult<Box<dyn ProductTransaction>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Failed to begin transaction", e))?;
        debug!("Product transaction started");
        Ok(Box::new(PgProductTransaction { tx }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete product", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete all products", e))?;
        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// A product write transaction on one pooled connection.
///
/// Dropping without `commit` rolls back; sqlx returns the connection to the
/// pool either way.
pub struct PgProductTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ProductTransaction for PgProductTransaction {
    async fn delete_images(&mut self, product_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete product images", e))?;
        Ok(result.rows_affected())
    }

    async fn save_product(&mut self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE products SET title = $2, price = $3, description = $4, slug = $5, \
             stock = $6, sizes = $7, gender = $8, tags = $9, updated_at = $10 \
             WHERE id = $1",
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender)
        .bind(&product.tags)
        .bind(product.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to save product", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Product with {} not found",
                product.id
            )));
        }
        Ok(())
    }

    async fn insert_images(
        &mut self,
        product_id: Uuid,
        urls: &[String],
    ) -> AppResult<Vec<ProductImage>> {
        insert_images(&mut self.tx, product_id, urls).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self { tx } = *self;
        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Failed to commit transaction", e))?;
        debug!("Product transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let Self { tx } = *self;
        tx.rollback()
            .await
            .map_err(|e| map_sqlx_error("Failed to rollback transaction", e))?;
        debug!("Product transaction rolled back");
        Ok(())
    }
}

/// Insert one image row per URL, in list order.
async fn insert_images(
    conn: &mut PgConnection,
    product_id: Uuid,
    urls: &[String],
) -> AppResult<Vec<ProductImage>> {
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let mut images = sqlx::query_as::<_, ProductImage>(
        "INSERT INTO product_images (url, product_id) \
         SELECT t.url, $2 FROM UNNEST($1::text[]) WITH ORDINALITY AS t(url, ord) \
         ORDER BY t.ord \
         RETURNING id, url, product_id",
    )
    .bind(urls)
    .bind(product_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| map_sqlx_error("Failed to insert product images", e))?;

    images.sort_by_key(|image| image.id);
    Ok(images)
}
