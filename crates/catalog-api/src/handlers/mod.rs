//! HTTP request handlers.

pub mod health;
pub mod product;
pub mod seed;
