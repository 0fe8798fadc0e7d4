//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Result of a seed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Number of products inserted.
    pub inserted: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answered.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store provider name.
    pub database: String,
}
