//! Provider Registry System
//!
//! Cache backend implementations register themselves at link time with
//! `#[linkme::distributed_slice(CACHE_BACKENDS)]` and are looked up by name
//! from configuration.

/// Cache backend registry
pub mod cache;

pub use cache::{
    CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry, list_cache_backends,
    resolve_cache_backend,
};
