//! Composition root
//!
//! Builds every collaborator of the recommendation gateway from an
//! [`AppConfig`]:
//!
//! ```text
//! AppConfig → linkme registry → CacheBackend ─┐
//!           → catalog seed → InMemoryCatalog ─┼→ RecsGateway
//!                          → InMemoryVectorStore ─┤
//!           → HttpRemoteRecommender (optional) ─┘
//! ```
//!
//! The cache backend's lifecycle belongs here: it is connected once in
//! [`init_app`] and released by [`AppContext::shutdown`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let recs = context.gateway().get_user_recommendations(&user, 20).await;
//! context.shutdown().await?;
//! ```

use crate::config::{AppConfig, CacheConfig, CatalogConfig, RemoteServiceConfig, validate_app_config};
use crate::error_ext::ErrorContext;
use bookmatch_application::ports::registry::resolve_cache_backend;
use bookmatch_application::use_cases::{GatewayDependencies, RecommendationCache, RecsGateway};
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::{CacheBackend, RemoteRecommender};
use bookmatch_providers::catalog::{CatalogSeed, InMemoryCatalog};
use bookmatch_providers::clock::SystemClock;
use bookmatch_providers::remote::HttpRemoteRecommender;
use bookmatch_providers::vector_store::InMemoryVectorStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Application context: the gateway and the providers behind it
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache_backend: Arc<dyn CacheBackend>,
    catalog: Arc<InMemoryCatalog>,
    vectors: Arc<InMemoryVectorStore>,
    gateway: Arc<RecsGateway>,
}

impl AppContext {
    /// Recommendation gateway
    pub fn gateway(&self) -> Arc<RecsGateway> {
        Arc::clone(&self.gateway)
    }

    /// Cache backend shared by every gateway in the process
    pub fn cache_backend(&self) -> Arc<dyn CacheBackend> {
        Arc::clone(&self.cache_backend)
    }

    /// Local item catalog
    ///
    /// Mutation handlers write here and then call
    /// [`RecsGateway::invalidate_user`].
    pub fn catalog(&self) -> Arc<InMemoryCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Local embedding store
    pub fn vectors(&self) -> Arc<InMemoryVectorStore> {
        Arc::clone(&self.vectors)
    }

    /// Release the cache backend connection
    pub async fn shutdown(&self) -> Result<()> {
        info!(
            backend = self.cache_backend.provider_name(),
            "Shutting down cache backend"
        );
        self.cache_backend.shutdown().await
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache_backend.provider_name())
            .field("catalog_items", &self.catalog.len())
            .field("vectors", &self.vectors.len())
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context
///
/// Fails on invalid configuration, an unknown cache backend, an unreadable
/// catalog seed, or an unusable remote service URL. An unreachable cache
/// store is not fatal: the gateway serves uncached until it comes back.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    validate_app_config(&config)?;
    let config = Arc::new(config);

    let cache_backend = build_cache_backend(&config.cache)?;
    if let Err(e) = cache_backend.connect().await {
        warn!(
            backend = cache_backend.provider_name(),
            cause = %e,
            "cache backend unavailable at startup; serving uncached"
        );
    }

    let seed = load_catalog_seed(&config.catalog).await?;
    let catalog = Arc::new(InMemoryCatalog::from_seed(&seed));
    let vectors = Arc::new(InMemoryVectorStore::from_seed(&seed));
    let remote = build_remote(&config.recommendations.remote)?;

    let mut cache = RecommendationCache::new(Arc::clone(&cache_backend), Arc::new(SystemClock))
        .with_index_grace(Duration::from_secs(
            config.recommendations.index_grace_secs,
        ));
    if let Some(namespace) = &config.cache.namespace {
        cache = cache.with_namespace(namespace.clone());
    }

    let deps = GatewayDependencies {
        cache,
        candidates: catalog.clone(),
        vectors: vectors.clone(),
        remote,
    };
    let gateway = RecsGateway::new(
        deps,
        config.gateway_settings(),
        config.recommendations.weights,
    )?;

    info!(
        cache = cache_backend.provider_name(),
        mode = %config.recommendations.mode,
        catalog_items = catalog.len(),
        vectors = vectors.len(),
        "Recommendation gateway initialized"
    );

    Ok(AppContext {
        config,
        cache_backend,
        catalog,
        vectors,
        gateway: Arc::new(gateway),
    })
}

/// Resolve the configured backend through the link-time registry
pub fn build_cache_backend(config: &CacheConfig) -> Result<Arc<dyn CacheBackend>> {
    resolve_cache_backend(&config.backend_config()).map_err(|e| Error::config(format!("Cache: {e}")))
}

async fn load_catalog_seed(config: &CatalogConfig) -> Result<CatalogSeed> {
    let Some(path) = &config.path else {
        warn!("No catalog seed configured; catalog starts empty");
        return Ok(CatalogSeed::default());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .io_context(format!("Failed to read catalog seed {}", path.display()))?;
    let seed = CatalogSeed::from_json(&raw)?;
    info!(
        path = %path.display(),
        items = seed.items.len(),
        users = seed.libraries.len(),
        "Catalog seed loaded"
    );
    Ok(seed)
}

fn build_remote(config: &RemoteServiceConfig) -> Result<Option<Arc<dyn RemoteRecommender>>> {
    let Some(base_url) = &config.base_url else {
        return Ok(None);
    };
    let mut client = HttpRemoteRecommender::new(base_url)?;
    if let Some(key) = &config.api_key {
        client = client.with_api_key(key.clone());
    }
    Ok(Some(Arc::new(client)))
}
