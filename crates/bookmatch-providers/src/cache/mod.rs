//! Cache Backend Implementations
//!
//! Key-value stores behind the recommendation cache.
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullCacheBackend`] | Testing | Stores nothing, every read misses |
//! | [`MokaCacheBackend`] | Local | In-process store with per-entry TTL |
//! | [`RedisCacheBackend`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Backend Selection Guide
//!
//! - **Development/Testing**: `NullCacheBackend` to disable caching
//! - **Single Instance**: `MokaCacheBackend`
//! - **Multi Instance**: `RedisCacheBackend`, so invalidation reaches every instance

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheBackend;
pub use null::NullCacheBackend;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheBackend;

pub use bookmatch_domain::ports::CacheStats;
