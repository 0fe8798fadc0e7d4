//! Create and update inputs for products.

use serde::{Deserialize, Serialize};

use super::model::Gender;

/// Data required to create a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product title.
    pub title: String,
    /// Unit price (defaults to 0).
    pub price: Option<f64>,
    /// Description.
    pub description: Option<String>,
    /// Slug; derived from the title when absent.
    pub slug: Option<String>,
    /// Units in stock (defaults to 0).
    pub stock: Option<i32>,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Target audience.
    pub gender: Gender,
    /// Tags (defaults to empty).
    pub tags: Option<Vec<String>>,
    /// Image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial product update. `None` leaves a field as it is.
///
/// `images: Some(list)` replaces every existing image, even when `list`
/// is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New title.
    pub title: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New description.
    pub description: Option<String>,
    /// New slug (normalised before saving).
    pub slug: Option<String>,
    /// New stock level.
    pub stock: Option<i32>,
    /// New sizes.
    pub sizes: Option<Vec<String>>,
    /// New target audience.
    pub gender: Option<Gender>,
    /// New tags.
    pub tags: Option<Vec<String>>,
    /// Replacement image URLs.
    pub images: Option<Vec<String>>,
}
