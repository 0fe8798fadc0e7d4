//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use catalog_entity::product::{CreateProduct, Gender, UpdateProduct};

/// Create product request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Title.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Price.
    #[validate(range(min = 0.0, message = "price must be a positive number"))]
    pub price: Option<f64>,
    /// Description.
    pub description: Option<String>,
    /// Slug.
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    /// Stock.
    #[validate(range(min = 0, message = "stock must be a positive integer"))]
    pub stock: Option<i32>,
    /// Sizes.
    pub sizes: Vec<String>,
    /// Gender.
    pub gender: Gender,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            title: req.title,
            price: req.price,
            description: req.description,
            slug: req.slug,
            stock: req.stock,
            sizes: req.sizes,
            gender: req.gender,
            tags: req.tags,
            images: req.images,
        }
    }
}

/// Update product request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    /// New title. The slug is not re-derived from it.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 0.0, message = "price must be a positive number"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    /// Normalised the same way as on create.
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    #[validate(range(min = 0, message = "stock must be a positive integer"))]
    pub stock: Option<i32>,
    /// Replaces the whole size list.
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Gender>,
    pub tags: Option<Vec<String>>,
    /// Replacement image URLs; `[]` removes every image.
    pub images: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            title: req.title,
            price: req.price,
            description: req.description,
            slug: req.slug,
            stock: req.stock,
            sizes: req.sizes,
            gender: req.gender,
            tags: req.tags,
            images: req.images,
        }
    }
}
