//! Core type definitions used across the catalog workspace.

pub mod pagination;

pub use pagination::PaginationParams;
