//! Recommendation Gateway
//!
//! Single entry point of the web layer for recommendations:
//!
//! 1. read the cache (bounded by the cache timeout)
//! 2. on a miss, rank locally or call the remote service (bounded by the
//!    upstream timeout)
//! 3. cache a successful result and register it for invalidation
//! 4. on any failure serve the popularity fallback
//!
//! Neither cache nor upstream errors reach the caller. A request degrades to
//! an uncached or popularity-only list instead.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use bookmatch_domain::constants::{
    FALLBACK_TTL_SECS, SIMILAR_ITEMS_TTL_SECS, UPSTREAM_TIMEOUT_MS, USER_RECS_TTL_SECS,
};
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::{CandidateSource, RemoteRecommender, VectorStore};
use bookmatch_domain::value_objects::{
    CandidateFilter, Fetched, ItemId, RecommendationItem, UserId,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::recommendation_cache::{RecommendationCache, cache_keys};
use crate::domain_services::{CandidateRanker, ProfileAggregator, ScoringWeights};

/// Default bound on a single cache operation
const CACHE_TIMEOUT_MS: u64 = 1000;

/// Clamp a requested list length
///
/// Missing or zero requests get `default`; everything is capped at `max`.
pub fn clamp_limit(requested: Option<usize>, default: usize, max: usize) -> usize {
    requested.filter(|n| *n > 0).unwrap_or(default).min(max)
}

/// Where ranked lists come from on a cache miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Profile aggregation and candidate ranking in process
    #[default]
    Local,
    /// The separately deployed recommendation service
    Remote,
}

impl std::fmt::Display for RankingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Gateway tuning
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Ranking path used on a miss
    pub mode: RankingMode,
    /// Bound on a remote ranking call
    pub upstream_timeout: Duration,
    /// Bound on each cache operation
    pub cache_timeout: Duration,
    /// TTL of personalized lists
    pub user_ttl: Duration,
    /// TTL of item-similarity lists
    pub similar_ttl: Duration,
    /// TTL of the shared popularity fallback
    pub fallback_ttl: Duration,
    /// Only rank publicly visible items
    pub public_only: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            mode: RankingMode::Local,
            upstream_timeout: Duration::from_millis(UPSTREAM_TIMEOUT_MS),
            cache_timeout: Duration::from_millis(CACHE_TIMEOUT_MS),
            user_ttl: Duration::from_secs(USER_RECS_TTL_SECS),
            similar_ttl: Duration::from_secs(SIMILAR_ITEMS_TTL_SECS),
            fallback_ttl: Duration::from_secs(FALLBACK_TTL_SECS),
            public_only: true,
        }
    }
}

/// Request counters
#[derive(Debug, Default)]
pub struct GatewayStats {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    upstream_calls: AtomicU64,
    fallbacks: AtomicU64,
    cache_errors: AtomicU64,
}

/// Point-in-time copy of [`GatewayStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayStatsSnapshot {
    /// Requests answered from the cache
    pub cache_hits: u64,
    /// Requests that missed the cache
    pub cache_misses: u64,
    /// Ranking passes or remote calls started
    pub upstream_calls: u64,
    /// Requests served from the popularity fallback
    pub fallbacks: u64,
    /// Cache operations that failed or timed out
    pub cache_errors: u64,
}

impl GatewayStats {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current counter values
    pub fn snapshot(&self) -> GatewayStatsSnapshot {
        GatewayStatsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            upstream_calls: self.upstream_calls.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            cache_errors: self.cache_errors.load(Ordering::Relaxed),
        }
    }
}

/// Collaborators of the gateway, constructed by the entry point
#[derive(Clone)]
pub struct GatewayDependencies {
    /// Recommendation cache over the injected backend
    pub cache: RecommendationCache,
    /// Candidate pool and user libraries
    pub candidates: Arc<dyn CandidateSource>,
    /// Item embeddings
    pub vectors: Arc<dyn VectorStore>,
    /// Remote ranking service, required in [`RankingMode::Remote`]
    pub remote: Option<Arc<dyn RemoteRecommender>>,
}

/// What a request ranks for
#[derive(Clone, Copy)]
enum Subject<'a> {
    User { id: &'a UserId, seeds: &'a [ItemId] },
    Item(&'a ItemId),
}

impl std::fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User { id, .. } => write!(f, "user:{id}"),
            Self::Item(id) => write!(f, "item:{id}"),
        }
    }
}

/// Serves recommendation lists with caching and graceful degradation
pub struct RecsGateway {
    cache: RecommendationCache,
    candidates: Arc<dyn CandidateSource>,
    vectors: Arc<dyn VectorStore>,
    remote: Option<Arc<dyn RemoteRecommender>>,
    profiles: ProfileAggregator,
    ranker: CandidateRanker,
    settings: GatewaySettings,
    stats: GatewayStats,
}

impl RecsGateway {
    /// Create a gateway
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when remote mode is selected without a
    /// remote recommender.
    pub fn new(
        deps: GatewayDependencies,
        settings: GatewaySettings,
        weights: ScoringWeights,
    ) -> Result<Self> {
        if settings.mode == RankingMode::Remote && deps.remote.is_none() {
            return Err(Error::config(
                "remote ranking mode requires a remote recommender",
            ));
        }
        Ok(Self {
            profiles: ProfileAggregator::new(Arc::clone(&deps.vectors)),
            ranker: CandidateRanker::new(weights),
            cache: deps.cache,
            candidates: deps.candidates,
            vectors: deps.vectors,
            remote: deps.remote,
            settings,
            stats: GatewayStats::default(),
        })
    }

    /// Settings in use
    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Counter snapshot
    pub fn stats(&self) -> GatewayStatsSnapshot {
        self.stats.snapshot()
    }

    /// Top `limit` recommendations for `user_id`
    ///
    /// `limit` is trusted; see [`clamp_limit`].
    pub async fn get_user_recommendations(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Vec<RecommendationItem> {
        self.get_user_recommendations_seeded(user_id, limit, &[])
            .await
    }

    /// Top `limit` recommendations for `user_id`, with extra seed items
    ///
    /// Seeds join the user's own items when building the local profile. The
    /// remote service has no notion of seeds and ignores them.
    pub async fn get_user_recommendations_seeded(
        &self,
        user_id: &UserId,
        limit: usize,
        seeds: &[ItemId],
    ) -> Vec<RecommendationItem> {
        self.serve(Subject::User { id: user_id, seeds }, limit)
            .await
    }

    /// Top `limit` items similar to `item_id`
    pub async fn get_similar_items(
        &self,
        item_id: &ItemId,
        limit: usize,
    ) -> Vec<RecommendationItem> {
        self.serve(Subject::Item(item_id), limit).await
    }

    /// Drop every cached list of `user_id`
    ///
    /// Called synchronously by the rating and library mutation handlers.
    /// Failures are logged and swallowed; the affected lists then age out
    /// with their TTL. Returns the number of entries deleted.
    pub async fn invalidate_user(&self, user_id: &UserId) -> usize {
        match self
            .bounded_cache_op(self.cache.invalidate_user(user_id))
            .await
        {
            Ok(removed) => removed,
            Err(e) => {
                GatewayStats::bump(&self.stats.cache_errors);
                warn!(user_id = %user_id, cause = %e, "cache invalidation failed");
                0
            }
        }
    }

    async fn serve(&self, subject: Subject<'_>, limit: usize) -> Vec<RecommendationItem> {
        let key = match subject {
            Subject::User { id, seeds } => cache_keys::user(id, limit, seeds),
            Subject::Item(id) => cache_keys::similar(id, limit),
        };

        if let Some(items) = self.cached(&key).await {
            GatewayStats::bump(&self.stats.cache_hits);
            debug!(subject = %subject, key = %key, "serving cached recommendations");
            return items;
        }
        GatewayStats::bump(&self.stats.cache_misses);

        GatewayStats::bump(&self.stats.upstream_calls);
        let started = Instant::now();
        let outcome = self.fetch(subject, limit).await;

        let cause = match outcome {
            Fetched::Found(items) => {
                let (ttl, owner) = match subject {
                    Subject::User { id, .. } => (self.settings.user_ttl, Some(id)),
                    Subject::Item(_) => (self.settings.similar_ttl, None),
                };
                debug!(
                    subject = %subject,
                    count = items.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "ranked recommendations"
                );
                self.store(&key, &items, ttl, owner).await;
                return items;
            }
            Fetched::NotFound => "no ranking available for subject".to_string(),
            Fetched::UpstreamFailure(cause) => cause,
        };

        warn!(
            subject = %subject,
            mode = %self.settings.mode,
            cause = %cause,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "ranking failed; serving popularity fallback"
        );
        self.fallback(limit).await
    }

    async fn fetch(&self, subject: Subject<'_>, limit: usize) -> Fetched<Vec<RecommendationItem>> {
        match self.settings.mode {
            RankingMode::Local => match subject {
                Subject::User { id, seeds } => match self.rank_for_user(id, seeds, limit).await {
                    Ok(items) => Fetched::Found(items),
                    Err(e) => Fetched::failure(e),
                },
                Subject::Item(id) => self.rank_similar(id, limit).await,
            },
            RankingMode::Remote => {
                let Some(remote) = self.remote.as_ref() else {
                    return Fetched::failure("no remote recommender configured");
                };
                let call = async {
                    match subject {
                        Subject::User { id, .. } => remote.user_top(id, limit).await,
                        Subject::Item(id) => remote.similar(id, limit).await,
                    }
                };
                match tokio::time::timeout(self.settings.upstream_timeout, call).await {
                    Ok(outcome) => outcome.map(|mut items| {
                        items.truncate(limit);
                        items
                    }),
                    Err(_) => Fetched::failure(format!(
                        "remote recommender timed out after {} ms",
                        self.settings.upstream_timeout.as_millis()
                    )),
                }
            }
        }
    }

    async fn rank_for_user(
        &self,
        user_id: &UserId,
        seeds: &[ItemId],
        limit: usize,
    ) -> Result<Vec<RecommendationItem>> {
        let mut items = self.candidates.user_items(user_id).await?;
        let mut seen: HashSet<ItemId> = items.iter().cloned().collect();
        for seed in seeds {
            if seen.insert(seed.clone()) {
                items.push(seed.clone());
            }
        }

        let profile = self.profiles.build_profile(&items).await?;
        if profile.is_none() {
            debug!(user_id = %user_id, "no taste profile; ranking by popularity signal");
        }

        let candidates = self.candidates.list_candidates(&self.filter()).await?;
        Ok(self.ranker.rank(profile.as_ref(), &candidates, limit))
    }

    async fn rank_similar(&self, item_id: &ItemId, limit: usize) -> Fetched<Vec<RecommendationItem>> {
        let query = match self.vectors.get_vector(item_id).await {
            Fetched::Found(vector) => vector,
            Fetched::NotFound => return Fetched::NotFound,
            Fetched::UpstreamFailure(cause) => return Fetched::UpstreamFailure(cause),
        };

        let filter = self.filter().excluding(item_id.clone());
        match self.candidates.list_candidates(&filter).await {
            Ok(candidates) => Fetched::Found(self.ranker.rank_similar(&query, &candidates, limit)),
            Err(e) => Fetched::failure(e),
        }
    }

    async fn fallback(&self, limit: usize) -> Vec<RecommendationItem> {
        GatewayStats::bump(&self.stats.fallbacks);
        let key = cache_keys::fallback(limit);
        if let Some(items) = self.cached(&key).await {
            return items;
        }

        match self.candidates.list_candidates(&self.filter()).await {
            Ok(candidates) => {
                let items = self.ranker.rank_popular(&candidates, limit);
                if !items.is_empty() {
                    self.store(&key, &items, self.settings.fallback_ttl, None)
                        .await;
                }
                items
            }
            Err(e) => {
                error!(cause = %e, "popularity fallback unavailable; returning empty list");
                Vec::new()
            }
        }
    }

    fn filter(&self) -> CandidateFilter {
        CandidateFilter {
            public_only: self.settings.public_only,
            exclude: Vec::new(),
        }
    }

    async fn cached(&self, key: &str) -> Option<Vec<RecommendationItem>> {
        match self.bounded_cache_op(self.cache.get(key)).await {
            Ok(lookup) => lookup.into_items(),
            Err(e) => {
                GatewayStats::bump(&self.stats.cache_errors);
                warn!(key, cause = %e, "cache read failed; treating as miss");
                None
            }
        }
    }

    async fn store(
        &self,
        key: &str,
        items: &[RecommendationItem],
        ttl: Duration,
        owner: Option<&UserId>,
    ) {
        if let Err(e) = self
            .bounded_cache_op(self.cache.put(key, items, ttl, owner))
            .await
        {
            GatewayStats::bump(&self.stats.cache_errors);
            warn!(key, cause = %e, "cache write failed; result served uncached");
        }
    }

    async fn bounded_cache_op<T>(&self, op: impl Future<Output = Result<T>>) -> Result<T> {
        let timeout = self.settings.cache_timeout;
        tokio::time::timeout(timeout, op).await.map_err(|_| {
            Error::cache(format!(
                "cache operation timed out after {} ms",
                timeout.as_millis()
            ))
        })?
    }
}

impl std::fmt::Debug for RecsGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecsGateway")
            .field("cache", &self.cache)
            .field("candidates", &self.candidates.provider_name())
            .field("vectors", &self.vectors.provider_name())
            .field(
                "remote",
                &self.remote.as_ref().map(|r| r.provider_name().to_string()),
            )
            .field("settings", &self.settings)
            .finish()
    }
}
