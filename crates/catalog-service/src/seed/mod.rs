//! Demo data loading.

pub mod data;
pub mod service;

pub use service::SeedService;
