//! Product and product image entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::input::{CreateProduct, UpdateProduct};
use super::slug::normalize_slug;

/// Target audience of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's line.
    Men,
    /// Women's line.
    Women,
    /// Children's line.
    Kid,
    /// Unisex.
    Unisex,
}

/// A catalog product row.
///
/// `images` is not a column; it is populated by the store after the row is
/// loaded, in image-id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Human-readable name (unique).
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Long description.
    pub description: Option<String>,
    /// URL-safe identifier (unique).
    pub slug: String,
    /// Units in stock.
    pub stock: i32,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Target audience.
    pub gender: Gender,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Owned images.
    #[sqlx(skip)]
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// An image owned by exactly one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductImage {
    /// Image identifier; ascending ids preserve insertion order.
    pub id: i32,
    /// External asset URL.
    pub url: String,
    /// Owning product.
    pub product_id: Uuid,
}

impl Product {
    /// Build a new, unsaved product from a create input.
    ///
    /// Returns the product (without images) and the image URLs to attach.
    pub fn from_create(input: CreateProduct) -> (Self, Vec<String>) {
        let now = Utc::now();
        let slug = normalize_slug(input.slug.as_deref().unwrap_or(&input.title));
        let product = Self {
            id: Uuid::new_v4(),
            title: input.title,
            price: input.price.unwrap_or(0.0),
            description: input.description,
            slug,
            stock: input.stock.unwrap_or(0),
            sizes: input.sizes,
            gender: input.gender,
            tags: input.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            images: Vec::new(),
        };
        (product, input.images)
    }

    /// Merge a partial update onto this product.
    ///
    /// Only scalar fields are merged. The replacement image list, if the
    /// caller supplied one, is handed back untouched.
    pub fn merge(&mut self, changes: UpdateProduct) -> Option<Vec<String>> {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(slug) = changes.slug {
            self.slug = slug;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(sizes) = changes.sizes {
            self.sizes = sizes;
        }
        if let Some(gender) = changes.gender {
            self.gender = gender;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        self.slug = normalize_slug(&self.slug);
        self.updated_at = Utc::now();
        changes.images
    }
}
