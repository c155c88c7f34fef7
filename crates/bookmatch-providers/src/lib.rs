//! # BookMatch - Provider Implementations
//!
//! Concrete adapters for the ports defined in `bookmatch-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheBackend` | Moka, Redis, Null |
//! | Vector Store | `VectorStore` | InMemory |
//! | Catalog | `CandidateSource` | InMemory |
//! | Remote ranking | `RemoteRecommender` | Http |
//! | Clock | `Clock` | System, Manual |
//!
//! Cache backends register themselves in the application-layer registry at
//! link time; binaries that resolve backends by name must link this crate
//! (`extern crate bookmatch_providers;`).
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! bookmatch-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

pub use bookmatch_domain::error::{Error, Result};
pub use bookmatch_domain::ports::{
    CacheBackend, CandidateSource, Clock, RemoteRecommender, VectorStore,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache backend implementations
pub mod cache;

/// Item catalog implementations
pub mod catalog;

/// Clock implementations
pub mod clock;

/// Remote recommendation service clients
pub mod remote;

/// Vector store implementations
pub mod vector_store;
