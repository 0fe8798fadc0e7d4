//! In-process product store.

pub mod store;

pub use store::{FailPoint, MemoryProductStore};
