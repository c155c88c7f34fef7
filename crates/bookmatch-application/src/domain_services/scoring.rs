//! Similarity Scoring
//!
//! Blends content similarity between a taste profile and a candidate with the
//! candidate's engagement signal:
//!
//! ```text
//! score = cosine(profile, embedding) + w_rating * avg_rating + w_pop * ln(1 + rating_count)
//! ```
//!
//! The popularity term lets items without an embedding still rank above zero
//! when they have ratings.

use bookmatch_domain::constants::{DEFAULT_POPULARITY_WEIGHT, DEFAULT_RATING_WEIGHT};
use bookmatch_domain::value_objects::{CandidateItem, EmbeddingVector};
use serde::{Deserialize, Serialize};

/// Weights of the popularity prior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplier of the average rating
    pub rating: f64,
    /// Multiplier of `ln(1 + rating_count)`
    pub popularity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING_WEIGHT,
            popularity: DEFAULT_POPULARITY_WEIGHT,
        }
    }
}

/// Cosine similarity in `[-1, 1]`
///
/// Returns 0 when either vector has zero magnitude or the dimensions differ.
pub fn cosine_similarity(a: &EmbeddingVector, b: &EmbeddingVector) -> f64 {
    let Some(dot) = a.dot(b) else {
        return 0.0;
    };

    let norm_a = a.magnitude();
    let norm_b = b.magnitude();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Scores candidates against an optional taste profile
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    weights: ScoringWeights,
}

impl SimilarityScorer {
    /// Create a scorer with the given weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Similarity term alone, 0 without a profile or a candidate embedding
    pub fn similarity(&self, profile: Option<&EmbeddingVector>, candidate: &CandidateItem) -> f64 {
        match (profile, candidate.embedding.as_ref()) {
            (Some(profile), Some(embedding)) => cosine_similarity(profile, embedding),
            _ => 0.0,
        }
    }

    /// Engagement term alone
    pub fn popularity_score(&self, candidate: &CandidateItem) -> f64 {
        self.weights.rating * candidate.average_rating
            + self.weights.popularity * (candidate.rating_count as f64).ln_1p()
    }

    /// Full ranking score
    pub fn score(&self, profile: Option<&EmbeddingVector>, candidate: &CandidateItem) -> f64 {
        self.similarity(profile, candidate) + self.popularity_score(candidate)
    }
}
