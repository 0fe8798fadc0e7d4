//! Custom Axum extractors.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::parse_uuid;
