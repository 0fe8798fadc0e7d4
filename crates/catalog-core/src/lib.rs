//! # catalog-core
//!
//! Core crate for the product catalog. Contains configuration schemas,
//! pagination parameters, and the unified error system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
