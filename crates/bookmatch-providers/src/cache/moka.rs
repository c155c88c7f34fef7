//! Moka in-memory cache backend
//!
//! In-process store for single-instance deployments and tests. Each slot
//! carries its own TTL through a moka [`Expiry`] policy, so recommendation
//! entries and invalidation indexes can expire independently.
//!
//! ## Example
//!
//! ```ignore
//! use bookmatch_providers::cache::MokaCacheBackend;
//!
//! let backend = MokaCacheBackend::with_capacity(10_000);
//! ```

use crate::constants::MOKA_DEFAULT_MAX_CAPACITY;
use async_trait::async_trait;
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::{CacheBackend, CacheStats};
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum SlotData {
    Text(String),
    Set(BTreeSet<String>),
}

/// Stored value plus the TTL to apply when it is written
///
/// `ttl: None` on an update keeps the remaining lifetime of the slot.
#[derive(Debug, Clone)]
struct Slot {
    data: SlotData,
    ttl: Option<Duration>,
}

struct SlotExpiry;

impl Expiry<String, Slot> for SlotExpiry {
    fn expire_after_create(&self, _key: &String, value: &Slot, _created_at: Instant) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Slot,
        _updated_at: Instant,
        duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl.or(duration_until_expiry)
    }
}

fn wrong_type(key: &str, expected: &str) -> Error {
    Error::cache(format!("key '{key}' does not hold a {expected} value"))
}

/// Moka-based in-memory cache backend
#[derive(Clone)]
pub struct MokaCacheBackend {
    cache: Cache<String, Slot>,
    max_capacity: u64,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for MokaCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheBackend {
    /// Create a backend with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MOKA_DEFAULT_MAX_CAPACITY)
    }

    /// Create a backend holding at most `max_capacity` keys
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(SlotExpiry)
            .build();

        Self {
            cache,
            max_capacity,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the maximum capacity of the cache
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }
}

#[async_trait]
impl CacheBackend for MokaCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.cache.get(key).await {
            Some(Slot {
                data: SlotData::Text(value),
                ..
            }) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value))
            }
            Some(_) => Err(wrong_type(key, "string")),
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let slot = Slot {
            data: SlotData::Text(value.to_string()),
            ttl: Some(ttl),
        };
        self.cache.insert(key.to_string(), slot).await;
        Ok(())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<()> {
        let member = member.to_string();
        let result = self
            .cache
            .entry(key.to_string())
            .and_compute_with(|existing| {
                let op = match existing.map(|entry| entry.into_value()) {
                    None => Op::Put(Slot {
                        data: SlotData::Set(BTreeSet::from([member])),
                        ttl: None,
                    }),
                    Some(Slot {
                        data: SlotData::Set(mut members),
                        ..
                    }) => {
                        members.insert(member);
                        Op::Put(Slot {
                            data: SlotData::Set(members),
                            ttl: None,
                        })
                    }
                    Some(_) => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        match result {
            CompResult::Unchanged(_) => Err(wrong_type(key, "set")),
            _ => Ok(()),
        }
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        match self.cache.get(key).await {
            Some(Slot {
                data: SlotData::Set(members),
                ..
            }) => Ok(members.into_iter().collect()),
            Some(_) => Err(wrong_type(key, "set")),
            None => Ok(Vec::new()),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let result = self
            .cache
            .entry(key.to_string())
            .and_compute_with(|existing| {
                let op = match existing {
                    Some(entry) => {
                        let mut slot = entry.into_value();
                        slot.ttl = Some(ttl);
                        Op::Put(slot)
                    }
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        Ok(matches!(result, CompResult::ReplacedWith(_)))
    }

    async fn stats(&self) -> Result<CacheStats> {
        self.cache.run_pending_tasks().await;
        Ok(CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        })
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheBackend")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bookmatch_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};

#[linkme::distributed_slice(CACHE_BACKENDS)]
static MOKA_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "moka",
    description: "Moka in-process cache with per-entry TTL",
    factory: |config: &CacheBackendConfig| {
        let backend = match config.max_capacity {
            Some(max_capacity) => MokaCacheBackend::with_capacity(max_capacity),
            None => MokaCacheBackend::new(),
        };
        Ok(std::sync::Arc::new(backend))
    },
};
