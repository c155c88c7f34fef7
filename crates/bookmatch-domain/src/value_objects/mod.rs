//! Value Objects
//!
//! Immutable types exchanged between the ranking, caching and gateway layers.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ItemId`], [`UserId`] | Opaque identifiers |
//! | [`EmbeddingVector`] | Item embedding or user taste profile |
//! | [`CandidateItem`] | Item with engagement signal considered for ranking |
//! | [`RecommendationItem`] | One ranked result |
//! | [`CacheEntry`] | Cached ranked list with its expiry |
//! | [`Fetched`] | Found / not found / upstream failure outcome |

/// Candidate items and listing filters
pub mod candidate;
/// Embedding vectors
pub mod embedding;
/// Explicit lookup outcomes
pub mod fetched;
/// Identifiers
pub mod ids;
/// Ranked results and cache entries
pub mod recommendation;

pub use candidate::{CandidateFilter, CandidateItem};
pub use embedding::EmbeddingVector;
pub use fetched::Fetched;
pub use ids::{ItemId, UserId};
pub use recommendation::{CacheEntry, CacheLookup, RecommendationItem};
