//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the recommendation core and the
//! outside world. High-level modules define the interfaces; providers and
//! infrastructure implement them.
//!
//! ## Organization
//!
//! - **infrastructure/** - Technical services (clock)
//! - **providers/** - External collaborators (cache, vectors, catalog, remote ranking)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::Clock;
pub use providers::{CacheBackend, CacheStats, CandidateSource, RemoteRecommender, VectorStore};
