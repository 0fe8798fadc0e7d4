//! # catalog-api
//!
//! HTTP API layer for the product catalog built on Axum.
//!
//! Provides the REST endpoints, request logging and CORS middleware, body
//! validation, and the mapping from [`AppError`](catalog_core::AppError) to
//! HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
