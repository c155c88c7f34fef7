//! Recommendation Cache
//!
//! Ranked lists are stored as JSON [`CacheEntry`] values with a TTL. Every
//! entry written on behalf of a user is also registered in that user's
//! invalidation index, a set of keys whose own TTL is the entry TTL plus a
//! grace period, so the index always outlives what it tracks. Invalidating a
//! user deletes exactly the keys in the index; there is no pattern scan.
//!
//! Expiry is checked against the injected [`Clock`] on every read, so an entry
//! the backend has not evicted yet is still a miss once it is past due.

use std::sync::Arc;
use std::time::Duration;

use bookmatch_domain::constants::INVALIDATION_INDEX_GRACE_SECS;
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::{CacheBackend, Clock};
use bookmatch_domain::value_objects::{CacheEntry, CacheLookup, RecommendationItem, UserId};
use tracing::{debug, info, warn};

/// Cache key builders
///
/// Keys are deterministic functions of the subject and the requested count.
pub mod cache_keys {
    use bookmatch_domain::constants::CACHE_KEY_PREFIX;
    use bookmatch_domain::value_objects::{ItemId, UserId};

    /// Personalized list for `user` of length `n`
    ///
    /// Seeds are sorted and deduplicated so their order does not split the cache.
    pub fn user(user: &UserId, n: usize, seeds: &[ItemId]) -> String {
        if seeds.is_empty() {
            return format!("{CACHE_KEY_PREFIX}:user:{user}:n:{n}");
        }
        let mut seeds: Vec<&str> = seeds.iter().map(ItemId::as_str).collect();
        seeds.sort_unstable();
        seeds.dedup();
        format!("{CACHE_KEY_PREFIX}:user:{user}:n:{n}:seeds:{}", seeds.join(","))
    }

    /// Items similar to `item`
    #[inline]
    pub fn similar(item: &ItemId, n: usize) -> String {
        format!("{CACHE_KEY_PREFIX}:similar:{item}:n:{n}")
    }

    /// Popularity fallback list, shared by all users
    #[inline]
    pub fn fallback(n: usize) -> String {
        format!("{CACHE_KEY_PREFIX}:fallback:n:{n}")
    }

    /// Invalidation index of `user`
    #[inline]
    pub fn index(user: &UserId) -> String {
        format!("{CACHE_KEY_PREFIX}:index:user:{user}")
    }
}

/// TTL cache of ranked recommendation lists
#[derive(Clone)]
pub struct RecommendationCache {
    backend: Arc<dyn CacheBackend>,
    clock: Arc<dyn Clock>,
    index_grace: Duration,
    namespace: Option<String>,
}

impl RecommendationCache {
    /// Create a cache over an injected, already connected backend
    pub fn new(backend: Arc<dyn CacheBackend>, clock: Arc<dyn Clock>) -> Self {
        Self {
            backend,
            clock,
            index_grace: Duration::from_secs(INVALIDATION_INDEX_GRACE_SECS),
            namespace: None,
        }
    }

    /// Override the extra lifetime of invalidation indexes
    pub fn with_index_grace(mut self, grace: Duration) -> Self {
        self.index_grace = grace;
        self
    }

    /// Prefix every backend key with `namespace:`
    ///
    /// Lets several deployments share one store.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// Name of the underlying backend
    pub fn backend_name(&self) -> &str {
        self.backend.provider_name()
    }

    fn storage_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }

    /// Look up `key`
    ///
    /// Absent, expired and undecodable entries are all a [`CacheLookup::Miss`].
    /// Expired and undecodable entries are purged best-effort.
    pub async fn get(&self, key: &str) -> Result<CacheLookup> {
        let storage_key = self.storage_key(key);
        let Some(raw) = self.backend.get(&storage_key).await? else {
            return Ok(CacheLookup::Miss);
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key, cause = %e, "discarding undecodable cache entry");
                self.purge(&storage_key).await;
                return Ok(CacheLookup::Miss);
            }
        };

        if entry.is_expired_at(self.clock.now()) {
            debug!(key, expires_at = %entry.expires_at, "cache entry expired");
            self.purge(&storage_key).await;
            return Ok(CacheLookup::Miss);
        }

        Ok(CacheLookup::Hit(entry))
    }

    /// Store `items` under `key` for `ttl`
    ///
    /// With an `owner`, the key is first registered in the owner's
    /// invalidation index and the index TTL is pushed out to `ttl + grace`.
    /// The entry is only written once registration succeeded.
    pub async fn put(
        &self,
        key: &str,
        items: &[RecommendationItem],
        ttl: Duration,
        owner: Option<&UserId>,
    ) -> Result<()> {
        let lifetime = chrono::Duration::from_std(ttl)
            .map_err(|e| Error::invalid_argument(format!("cache ttl out of range: {e}")))?;
        let entry = CacheEntry {
            key: key.to_string(),
            value: items.to_vec(),
            expires_at: self.clock.now() + lifetime,
        };
        let json = serde_json::to_string(&entry)?;

        let storage_key = self.storage_key(key);

        // Index before entry: a failure in between leaves a dangling index
        // member, never an entry that invalidation cannot reach.
        if let Some(user) = owner {
            let index_key = self.storage_key(&cache_keys::index(user));
            self.backend.set_add(&index_key, &storage_key).await?;
            self.backend.expire(&index_key, ttl + self.index_grace).await?;
        }

        self.backend.set_with_ttl(&storage_key, &json, ttl).await
    }

    /// Delete every entry registered for `user_id`, then the index itself
    ///
    /// Safe to call when nothing is cached; members that already expired are
    /// no-ops. Returns the number of entries actually deleted.
    ///
    /// There is no ordering against a concurrent `put` for the same user: a
    /// list computed before the mutation and written after this call stays
    /// readable until its TTL runs out. That bounded staleness is accepted.
    pub async fn invalidate_user(&self, user_id: &UserId) -> Result<usize> {
        let index_key = self.storage_key(&cache_keys::index(user_id));
        let members = self.backend.set_members(&index_key).await?;

        let mut removed = 0;
        for key in &members {
            if self.backend.delete(key).await? {
                removed += 1;
            }
        }
        self.backend.delete(&index_key).await?;

        info!(
            user_id = %user_id,
            tracked = members.len(),
            removed,
            "invalidated cached recommendations"
        );
        Ok(removed)
    }

    async fn purge(&self, storage_key: &str) {
        if let Err(e) = self.backend.delete(storage_key).await {
            debug!(key = storage_key, cause = %e, "failed to purge stale cache entry");
        }
    }
}

impl std::fmt::Debug for RecommendationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationCache")
            .field("backend", &self.backend.provider_name())
            .field("index_grace", &self.index_grace)
            .field("namespace", &self.namespace)
            .finish()
    }
}
