//! # catalog-database
//!
//! The product store contract and its two backends: PostgreSQL (sqlx) and
//! an in-process memory store. Also owns connection pooling, embedded
//! migrations, and the mapping of driver errors into [`AppError`].
//!
//! [`AppError`]: catalog_core::AppError

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryProductStore;
pub use provider::connect_store;
pub use repositories::PgProductStore;
pub use store::{ProductStore, ProductTransaction};
