//! # BookMatch Recommendations
//!
//! Serving and caching layer of the BookMatch book recommendation system.
//!
//! A request for a user's recommendations, or for items similar to a book, is
//! answered from a TTL cache when possible. On a miss the ranked list is
//! computed, either locally from content embeddings and rating signal or by
//! the remote recommendation service, and written back. Any failure along the
//! way degrades to a popularity-ranked list instead of an error.
//!
//! ## Example
//!
//! ```ignore
//! use bookmatch::infrastructure::{ConfigLoader, init_app};
//! use bookmatch::domain::value_objects::UserId;
//!
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let recs = context
//!     .gateway()
//!     .get_user_recommendations(&UserId::from("u1"), 20)
//!     .await;
//! context.shutdown().await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, errors and port traits
//! - `application` - Scoring, ranking, the recommendation cache and gateway
//! - `infrastructure` - Configuration, logging and the composition root
//! - `providers` - Cache backends, in-memory catalog, HTTP remote client

/// Domain layer - value objects, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bookmatch_domain::*;
}

/// Application layer - ranking, caching and serving
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use bookmatch_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bookmatch_infrastructure::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use bookmatch_providers::*;
}

// Re-export the serving entry points at the crate root
pub use application::{RecsGateway, clamp_limit};
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};
