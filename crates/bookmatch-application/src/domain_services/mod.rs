//! Domain Services
//!
//! Stateless ranking pieces composed by the gateway.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ProfileAggregator`] | Mean embedding of a user's items |
//! | [`SimilarityScorer`] | Cosine similarity plus popularity prior |
//! | [`CandidateRanker`] | Score, sort and truncate a candidate pool |

/// User taste profile aggregation
pub mod profile;
/// Candidate ranking
pub mod ranking;
/// Similarity scoring
pub mod scoring;

pub use profile::{ProfileAggregator, mean_vector};
pub use ranking::CandidateRanker;
pub use scoring::{ScoringWeights, SimilarityScorer, cosine_similarity};
