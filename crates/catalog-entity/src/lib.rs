//! # catalog-entity
//!
//! Domain entity models for the product catalog. Database entities derive
//! `sqlx::FromRow`; inputs and the flattened response shape are plain
//! serde types.

pub mod product;

pub use product::{
    CreateProduct, Gender, Product, ProductImage, ProductResponse, UpdateProduct,
    normalize_slug,
};
