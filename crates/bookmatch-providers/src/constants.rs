//! Provider Constants
//!
//! Constants specific to provider implementations, separate from the
//! domain defaults in `bookmatch-domain`.

// ============================================================================
// CACHE BACKEND CONSTANTS
// ============================================================================

/// Default entry capacity of the in-process cache
pub const MOKA_DEFAULT_MAX_CAPACITY: u64 = 100_000;

/// Default Redis URL when none is configured
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

// ============================================================================
// REMOTE RECOMMENDER CONSTANTS
// ============================================================================

/// Header carrying the remote service API key
pub const REMOTE_API_KEY_HEADER: &str = "X-API-KEY";

/// Provider name of the HTTP remote recommender
pub const REMOTE_HTTP_PROVIDER_NAME: &str = "http";

/// Maximum characters of an error body kept in failure messages
pub const ERROR_BODY_PREVIEW_LEN: usize = 200;
