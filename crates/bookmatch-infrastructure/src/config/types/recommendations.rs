//! Recommendation serving configuration types

use bookmatch_application::domain_services::ScoringWeights;
use bookmatch_application::use_cases::RankingMode;
use bookmatch_domain::constants::{
    DEFAULT_SIMILAR_LIMIT, DEFAULT_USER_LIMIT, FALLBACK_TTL_SECS, INVALIDATION_INDEX_GRACE_SECS,
    MAX_RECOMMENDATION_LIMIT, SIMILAR_ITEMS_TTL_SECS, UPSTREAM_TIMEOUT_MS, USER_RECS_TTL_SECS,
};
use serde::{Deserialize, Serialize};

/// Remote recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteServiceConfig {
    /// Service base URL; required in remote mode
    pub base_url: Option<String>,

    /// Sent as `X-API-KEY` when set
    pub api_key: Option<String>,

    /// Bound on one ranking call in milliseconds
    pub timeout_ms: u64,
}

impl Default for RemoteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_ms: UPSTREAM_TIMEOUT_MS,
        }
    }
}

/// Recommendation serving configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    /// Ranking path used on a cache miss
    pub mode: RankingMode,

    /// Remote ranking service
    pub remote: RemoteServiceConfig,

    /// TTL of personalized lists
    pub user_ttl_secs: u64,

    /// TTL of item-similarity lists
    pub similar_ttl_secs: u64,

    /// TTL of the shared popularity fallback
    pub fallback_ttl_secs: u64,

    /// Extra lifetime of a user's invalidation index
    pub index_grace_secs: u64,

    /// Upper bound on any requested list length
    pub max_limit: usize,

    /// List length when a user request names none
    pub default_user_limit: usize,

    /// List length when a similar-items request names none
    pub default_similar_limit: usize,

    /// Rank only publicly visible items
    pub public_only: bool,

    /// Popularity prior weights
    pub weights: ScoringWeights,
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            mode: RankingMode::Local,
            remote: RemoteServiceConfig::default(),
            user_ttl_secs: USER_RECS_TTL_SECS,
            similar_ttl_secs: SIMILAR_ITEMS_TTL_SECS,
            fallback_ttl_secs: FALLBACK_TTL_SECS,
            index_grace_secs: INVALIDATION_INDEX_GRACE_SECS,
            max_limit: MAX_RECOMMENDATION_LIMIT,
            default_user_limit: DEFAULT_USER_LIMIT,
            default_similar_limit: DEFAULT_SIMILAR_LIMIT,
            public_only: true,
            weights: ScoringWeights::default(),
        }
    }
}
