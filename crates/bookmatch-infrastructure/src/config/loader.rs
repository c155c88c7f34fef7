//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::{AppConfig, CacheConfig, CatalogConfig, LoggingConfig, RecommendationsConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use bookmatch_application::use_cases::RankingMode;
use bookmatch_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix, `__` between nested keys
    ///    (e.g., `BOOKMATCH_CACHE__PROVIDER=redis`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the conventional locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_cache_config(&config.cache)?;
    validate_recommendations_config(&config.recommendations)?;
    validate_catalog_config(&config.catalog)?;
    Ok(())
}

fn invalid(message: impl Into<String>) -> Error {
    Error::config(message)
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    if config.file_output.is_some() && config.max_files == 0 {
        return Err(invalid(
            "Maximum log files cannot be 0 when file output is enabled",
        ));
    }
    Ok(())
}

fn validate_cache_config(config: &CacheConfig) -> Result<()> {
    if config.provider.trim().is_empty() {
        return Err(invalid("Cache provider cannot be empty"));
    }
    if config.provider == "redis" && config.redis_url.is_none() {
        return Err(invalid(
            "Redis URL is required when the redis cache provider is selected",
        ));
    }
    if config.max_capacity == Some(0) {
        return Err(invalid("Cache max capacity cannot be 0"));
    }
    if config.timeout_ms == 0 {
        return Err(invalid("Cache operation timeout cannot be 0"));
    }
    Ok(())
}

fn validate_recommendations_config(config: &RecommendationsConfig) -> Result<()> {
    let ttls = [
        ("user_ttl_secs", config.user_ttl_secs),
        ("similar_ttl_secs", config.similar_ttl_secs),
        ("fallback_ttl_secs", config.fallback_ttl_secs),
    ];
    if let Some((name, _)) = ttls.iter().find(|(_, secs)| *secs == 0) {
        return Err(invalid(format!("Recommendation TTL {name} cannot be 0")));
    }
    if config.max_limit == 0 {
        return Err(invalid("Recommendation max_limit cannot be 0"));
    }
    if config.default_user_limit == 0 || config.default_similar_limit == 0 {
        return Err(invalid("Default recommendation limits cannot be 0"));
    }
    if config.remote.timeout_ms == 0 {
        return Err(invalid("Remote service timeout cannot be 0"));
    }
    if config.mode == RankingMode::Remote && config.remote.base_url.is_none() {
        return Err(invalid(
            "Remote service base_url is required when ranking mode is remote",
        ));
    }
    let weights = config.weights;
    let usable = |w: f64| w.is_finite() && w >= 0.0;
    if !usable(weights.rating) || !usable(weights.popularity) {
        return Err(invalid(format!(
            "Scoring weights must be finite and non-negative (rating={}, popularity={})",
            weights.rating, weights.popularity
        )));
    }
    Ok(())
}

fn validate_catalog_config(config: &CatalogConfig) -> Result<()> {
    if config
        .path
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err(invalid("Catalog path cannot be empty"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set recommendation serving configuration
    pub fn with_recommendations(mut self, recommendations: RecommendationsConfig) -> Self {
        self.config.recommendations = recommendations;
        self
    }

    /// Set the catalog seed file
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.catalog.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
