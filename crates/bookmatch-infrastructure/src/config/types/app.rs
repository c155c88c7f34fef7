//! Main application configuration

use super::{CacheConfig, CatalogConfig, LoggingConfig, RecommendationsConfig};
use bookmatch_application::use_cases::GatewaySettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cache backend configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Recommendation serving configuration
    #[serde(default)]
    pub recommendations: RecommendationsConfig,

    /// Local catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Gateway settings derived from the cache and recommendation sections
    pub fn gateway_settings(&self) -> GatewaySettings {
        let recs = &self.recommendations;
        GatewaySettings {
            mode: recs.mode,
            upstream_timeout: Duration::from_millis(recs.remote.timeout_ms),
            cache_timeout: self.cache.timeout(),
            user_ttl: Duration::from_secs(recs.user_ttl_secs),
            similar_ttl: Duration::from_secs(recs.similar_ttl_secs),
            fallback_ttl: Duration::from_secs(recs.fallback_ttl_secs),
            public_only: recs.public_only,
        }
    }
}
