//! Product domain entities.

pub mod input;
pub mod model;
pub mod response;
pub mod slug;

pub use input::{CreateProduct, UpdateProduct};
pub use model::{Gender, Product, ProductImage};
pub use response::ProductResponse;
pub use slug::normalize_slug;
