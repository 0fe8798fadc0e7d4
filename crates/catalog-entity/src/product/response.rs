//! Flattened external representation of a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Gender, Product};

/// A product with its images reduced to URL strings.
///
/// Every read and write operation returns this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let images = product.images.into_iter().map(|image| image.url).collect();
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            slug: product.slug,
            stock: product.stock,
            sizes: product.sizes,
            gender: product.gender,
            tags: product.tags,
            created_at: product.created_at,
            updated_at: product.updated_at,
            images,
        }
    }
}
