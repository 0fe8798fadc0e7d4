//! Catalog behaviour switches.

use serde::{Deserialize, Serialize};

/// Settings that change what the catalog service is allowed to do.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Permit the bulk delete and seed operations. Off by default.
    #[serde(default)]
    pub allow_bulk_delete: bool,
}
