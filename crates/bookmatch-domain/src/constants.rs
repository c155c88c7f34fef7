//! Domain constants
//!
//! Design defaults for scoring and caching. Every value here is exposed as
//! configuration by the infrastructure layer; these are only the defaults.

// ============================================================================
// SCORING CONSTANTS
// ============================================================================

/// Weight applied to a candidate's average rating
pub const DEFAULT_RATING_WEIGHT: f64 = 0.2;

/// Weight applied to `ln(1 + rating_count)`
pub const DEFAULT_POPULARITY_WEIGHT: f64 = 0.05;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// TTL for cached user recommendation lists (30 minutes)
pub const USER_RECS_TTL_SECS: u64 = 30 * 60;

/// TTL for cached item-similarity lists (60 minutes)
pub const SIMILAR_ITEMS_TTL_SECS: u64 = 60 * 60;

/// TTL for the cached popularity fallback list (60 minutes)
pub const FALLBACK_TTL_SECS: u64 = 60 * 60;

/// Extra lifetime given to an invalidation index beyond the entries it tracks
pub const INVALIDATION_INDEX_GRACE_SECS: u64 = 60;

/// Prefix shared by every recommendation cache key
pub const CACHE_KEY_PREFIX: &str = "recs";

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Upper bound for any requested list length
pub const MAX_RECOMMENDATION_LIMIT: usize = 100;

/// Default list length for user recommendations
pub const DEFAULT_USER_LIMIT: usize = 20;

/// Default list length for similar-item lookups
pub const DEFAULT_SIMILAR_LIMIT: usize = 10;

/// Timeout applied to remote ranking calls (5 seconds)
pub const UPSTREAM_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// REASON TAGS
// ============================================================================

/// Reason attached to items ranked on popularity signal alone
pub const REASON_POPULAR: &str = "popular";

/// Reason attached to items that matched the user's taste profile
pub const REASON_SIMILAR_TASTE: &str = "similar-taste";

/// Reason attached to items similar to a source item
pub const REASON_SIMILAR_CONTENT: &str = "similar-content";
