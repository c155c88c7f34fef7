//! Candidate items considered by a ranking pass

use super::{EmbeddingVector, ItemId};
use serde::{Deserialize, Serialize};

/// Value Object: Ranking Candidate
///
/// An item from the catalog together with its engagement signal and, when the
/// background embedding step has completed, its content embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    /// Catalog identifier
    pub item_id: ItemId,
    /// Mean of all user ratings, 0 when unrated
    pub average_rating: f64,
    /// Number of ratings received
    pub rating_count: u64,
    /// Content embedding, absent until computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<EmbeddingVector>,
}

impl CandidateItem {
    /// Create a candidate with no engagement signal and no embedding
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            average_rating: 0.0,
            rating_count: 0,
            embedding: None,
        }
    }

    /// Set the rating signal
    pub fn with_ratings(mut self, average_rating: f64, rating_count: u64) -> Self {
        self.average_rating = average_rating;
        self.rating_count = rating_count;
        self
    }

    /// Attach an embedding
    pub fn with_embedding(mut self, embedding: impl Into<EmbeddingVector>) -> Self {
        self.embedding = Some(embedding.into());
        self
    }
}

/// Filter applied when listing candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    /// Only list publicly visible items
    pub public_only: bool,
    /// Items to leave out of the candidate set
    pub exclude: Vec<ItemId>,
}

impl CandidateFilter {
    /// Filter restricted to public items
    pub fn public() -> Self {
        Self {
            public_only: true,
            exclude: Vec::new(),
        }
    }

    /// Exclude an item from the listing
    pub fn excluding(mut self, item_id: ItemId) -> Self {
        self.exclude.push(item_id);
        self
    }
}
