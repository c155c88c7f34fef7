//! Catalog configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local catalog configuration
///
/// Without a seed file the in-memory catalog starts empty and every request
/// resolves to an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog seed (items, embeddings, user libraries)
    pub path: Option<PathBuf>,
}
