//! # catalog-service
//!
//! Business logic for the product catalog. Services receive their store and
//! their logging dispatcher at construction time and hand back the flattened
//! [`ProductResponse`](catalog_entity::product::ProductResponse) shape.

pub mod product;
pub mod seed;

pub use product::ProductService;
pub use seed::SeedService;
