//! Null cache backend
//!
//! Accepts every write and forgets it. Selecting it disables caching without
//! touching the gateway.

use async_trait::async_trait;
use bookmatch_domain::error::Result;
use bookmatch_domain::ports::CacheBackend;
use std::time::Duration;

/// Cache backend that doesn't store anything
///
/// # Example
///
/// ```rust
/// use bookmatch_providers::cache::NullCacheBackend;
///
/// let backend = NullCacheBackend::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheBackend;

impl NullCacheBackend {
    /// Create a new null cache backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheBackend for NullCacheBackend {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_with_ttl(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn set_add(&self, _key: &str, _member: &str) -> Result<()> {
        Ok(())
    }

    async fn set_members(&self, _key: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn expire(&self, _key: &str, _ttl: Duration) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bookmatch_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};

#[linkme::distributed_slice(CACHE_BACKENDS)]
static NULL_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "null",
    description: "Null backend (caching disabled)",
    factory: |_config: &CacheBackendConfig| Ok(std::sync::Arc::new(NullCacheBackend::new())),
};
