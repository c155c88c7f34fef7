//! Cache Backend Port
//!
//! Port for the key-value store backing the recommendation cache. Supports
//! in-process (Moka), distributed (Redis), and null backends.
//!
//! The primitive set is the one the recommendation cache needs for both its
//! entries and its per-user invalidation indexes: plain string values with a
//! TTL, and string sets that can be listed, deleted, and given a TTL.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Operation Statistics
///
/// Tracks backend hit/miss counts where the backend can observe them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Backend Port
///
/// Defines the contract for key-value stores used by the recommendation
/// cache. Implementations are constructed by the process entry point,
/// connected there, and injected; the recommendation layer never creates or
/// tears down a backend itself.
///
/// # Example
///
/// ```ignore
/// use bookmatch_domain::ports::providers::CacheBackend;
/// use std::time::Duration;
///
/// backend.set_with_ttl("recs:user:42:n:20", &json, Duration::from_secs(1800)).await?;
/// backend.set_add("recs:index:user:42", "recs:user:42:n:20").await?;
/// backend.expire("recs:index:user:42", Duration::from_secs(1860)).await?;
/// ```
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Establish the connection to the store
    ///
    /// Idempotent. In-process backends have nothing to do.
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    /// Release the connection to the store
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    /// Get a string value, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a string value that expires after `ttl`
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Add `member` to the set stored at `key`, creating it if needed
    ///
    /// Does not change the TTL of an existing set.
    async fn set_add(&self, key: &str, member: &str) -> Result<()>;

    /// List the members of the set stored at `key` (empty if absent)
    async fn set_members(&self, key: &str) -> Result<Vec<String>>;

    /// Delete a key of any type
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Set the TTL of an existing key
    ///
    /// # Returns
    /// True if the key exists and the TTL was applied
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    /// Get the name/identifier of this backend implementation
    ///
    /// # Returns
    /// A string identifier for the backend (e.g., "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}
