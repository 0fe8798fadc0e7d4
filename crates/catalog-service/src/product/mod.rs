//! Product use cases.

pub mod errors;
pub mod service;

pub use service::ProductService;
