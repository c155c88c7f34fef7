//! External Provider Ports
//!
//! Ports for the collaborators the recommendation layer consumes.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheBackend | Key-value store for cached lists and invalidation indexes |
//! | VectorStore | Item embedding lookup |
//! | CandidateSource | Candidate pool and user interaction history |
//! | RemoteRecommender | Remote ranking microservice |

/// Cache backend port
pub mod cache;
/// Candidate source port
pub mod candidates;
/// Remote recommender port
pub mod remote;
/// Vector store port
pub mod vector_store;

// Re-export provider ports for convenience
pub use cache::{CacheBackend, CacheStats};
pub use candidates::CandidateSource;
pub use remote::RemoteRecommender;
pub use vector_store::VectorStore;
