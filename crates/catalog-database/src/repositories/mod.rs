//! PostgreSQL repository implementations.

pub mod product;

pub use product::{PgProductStore, PgProductTransaction};
