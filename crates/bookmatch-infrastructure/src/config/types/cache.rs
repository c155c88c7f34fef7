//! Cache configuration types

use crate::constants::{CACHE_OPERATION_TIMEOUT_MS, DEFAULT_CACHE_PROVIDER};
use bookmatch_application::ports::registry::CacheBackendConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Registered backend name (`moka`, `redis`, `null`)
    pub provider: String,

    /// Redis URL (for the Redis backend)
    pub redis_url: Option<String>,

    /// Entry bound of the in-process backend
    pub max_capacity: Option<u64>,

    /// Prefix isolating this deployment's keys in a shared store
    pub namespace: Option<String>,

    /// Bound on a single cache operation in milliseconds
    pub timeout_ms: u64,
}

impl CacheConfig {
    /// Registry lookup for this section
    pub fn backend_config(&self) -> CacheBackendConfig {
        let mut config = CacheBackendConfig::new(&self.provider);
        if let Some(url) = &self.redis_url {
            config = config.with_uri(url);
        }
        if let Some(capacity) = self.max_capacity {
            config = config.with_max_capacity(capacity);
        }
        config
    }

    /// Operation timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            redis_url: None,
            max_capacity: None,
            namespace: None,
            timeout_ms: CACHE_OPERATION_TIMEOUT_MS,
        }
    }
}
