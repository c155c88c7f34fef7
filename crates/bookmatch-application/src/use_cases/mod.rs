//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`RecommendationCache`] | TTL cache of ranked lists with per-user invalidation |
//! | [`RecsGateway`] | Cache, rank or call upstream, fall back to popularity |

/// Recommendation cache
pub mod recommendation_cache;
/// Recommendation gateway
pub mod recs_gateway;

pub use recommendation_cache::{RecommendationCache, cache_keys};
pub use recs_gateway::{
    GatewayDependencies, GatewaySettings, GatewayStats, GatewayStatsSnapshot, RankingMode,
    RecsGateway, clamp_limit,
};
