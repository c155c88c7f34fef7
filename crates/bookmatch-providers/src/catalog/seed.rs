//! Catalog seed file
//!
//! JSON snapshot of the catalog used to fill the in-memory providers:
//!
//! ```json
//! {
//!   "items": [
//!     { "itemId": "b1", "averageRating": 4.5, "ratingCount": 12, "embedding": [0.1, 0.9] },
//!     { "itemId": "b2", "public": false }
//!   ],
//!   "libraries": { "u1": ["b1"] }
//! }
//! ```

use bookmatch_domain::error::Result;
use bookmatch_domain::value_objects::{CandidateItem, EmbeddingVector, ItemId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_public() -> bool {
    true
}

/// One catalog item of a seed file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedItem {
    /// Catalog identifier
    pub item_id: ItemId,
    /// Mean rating
    #[serde(default)]
    pub average_rating: f64,
    /// Number of ratings
    #[serde(default)]
    pub rating_count: u64,
    /// Content embedding, if computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<EmbeddingVector>,
    /// Publicly visible
    #[serde(default = "default_public")]
    pub public: bool,
}

impl SeedItem {
    /// Candidate view of the item
    pub fn to_candidate(&self) -> CandidateItem {
        CandidateItem {
            item_id: self.item_id.clone(),
            average_rating: self.average_rating,
            rating_count: self.rating_count,
            embedding: self.embedding.clone(),
        }
    }
}

/// Catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSeed {
    /// Items in listing order
    #[serde(default)]
    pub items: Vec<SeedItem>,
    /// Rated and shelved items per user, first interaction first
    #[serde(default)]
    pub libraries: BTreeMap<UserId, Vec<ItemId>>,
}

impl CatalogSeed {
    /// Parse a seed from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
