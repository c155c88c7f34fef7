//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bookmatch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bookmatch";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "BOOKMATCH";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "BOOKMATCH_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

/// File stem used when the configured log path has none
pub const LOG_FILE_STEM: &str = "bookmatch";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache backend
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Default bound on a single cache operation (1 second)
pub const CACHE_OPERATION_TIMEOUT_MS: u64 = 1_000;
