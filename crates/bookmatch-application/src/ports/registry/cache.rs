//! Cache Backend Registry
//!
//! Backends submit a [`CacheBackendEntry`] into [`CACHE_BACKENDS`] from the
//! providers crate. The slice is only populated for backends that are
//! actually linked, so binaries must reference the providers crate.

use std::sync::Arc;

use bookmatch_domain::ports::CacheBackend;

/// Configuration for cache backend creation
///
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheBackendConfig {
    /// Backend name (e.g., "moka", "redis", "null")
    pub provider: String,
    /// Connection URI (for distributed stores)
    pub uri: Option<String>,
    /// Maximum number of entries (for in-process stores)
    pub max_capacity: Option<u64>,
}

impl CacheBackendConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the entry capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }
}

/// Registry entry for cache backends
pub struct CacheBackendEntry {
    /// Unique backend name (e.g., "moka", "redis", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&CacheBackendConfig) -> Result<Arc<dyn CacheBackend>, String>,
}

#[linkme::distributed_slice]
pub static CACHE_BACKENDS: [CacheBackendEntry] = [..];

/// Resolve a cache backend by name and build it
///
/// # Returns
/// * `Ok(Arc<dyn CacheBackend>)` - Created backend, not yet connected
/// * `Err(String)` - Unknown name or factory failure
pub fn resolve_cache_backend(config: &CacheBackendConfig) -> Result<Arc<dyn CacheBackend>, String> {
    let name = config.provider.as_str();
    match CACHE_BACKENDS.iter().find(|entry| entry.name == name) {
        Some(entry) => (entry.factory)(config),
        None => {
            let available: Vec<&str> = CACHE_BACKENDS.iter().map(|e| e.name).collect();
            Err(format!(
                "Unknown cache backend '{name}'. Available backends: {available:?}"
            ))
        }
    }
}

/// List all registered cache backends as `(name, description)` pairs
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    let mut backends: Vec<_> = CACHE_BACKENDS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    backends.sort_by_key(|(name, _)| *name);
    backends
}
