//! Redis distributed cache backend
//!
//! Shared store for multi-instance deployments, so an invalidation issued by
//! one instance is seen by all of them.
//!
//! The connection is opened by [`CacheBackend::connect`], which the process
//! entry point calls once at startup. Operations issued before that connect
//! lazily. [`CacheBackend::shutdown`] drops the connection.
//!
//! ## Example
//!
//! ```ignore
//! use bookmatch_providers::cache::RedisCacheBackend;
//!
//! let backend = RedisCacheBackend::new("redis://localhost:6379")?;
//! backend.connect().await?;
//! ```

use async_trait::async_trait;
use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::{CacheBackend, CacheStats};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

fn redis_error(operation: &str, e: RedisError) -> Error {
    Error::infrastructure_with_source(format!("Redis {operation} failed: {e}"), e)
}

/// Whole seconds of `ttl`, never below one so a key is not left without expiry
fn ttl_secs(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// Host part of a connection URL, credentials stripped
fn server_address(connection_string: &str) -> String {
    let without_scheme = connection_string
        .split_once("://")
        .map_or(connection_string, |(_, rest)| rest);
    without_scheme
        .rsplit_once('@')
        .map_or(without_scheme, |(_, host)| host)
        .to_string()
}

/// Redis cache backend
#[derive(Clone)]
pub struct RedisCacheBackend {
    client: Client,
    server: String,
    connection: Arc<RwLock<Option<ConnectionManager>>>,
}

impl RedisCacheBackend {
    /// Create a backend for `connection_string` without connecting
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::infrastructure_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            server: server_address(connection_string),
            connection: Arc::new(RwLock::new(None)),
        })
    }

    /// Server address, without credentials
    pub fn server_address(&self) -> &str {
        &self.server
    }

    /// Whether a connection is currently held
    pub async fn is_connected(&self) -> bool {
        self.connection.read().await.is_some()
    }

    /// Get the managed connection, opening it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        if let Some(manager) = self.connection.read().await.as_ref() {
            return Ok(manager.clone());
        }

        let mut guard = self.connection.write().await;
        if let Some(manager) = guard.as_ref() {
            return Ok(manager.clone());
        }
        let manager = ConnectionManager::new(self.client.clone())
            .await
            .map_err(|e| {
                Error::network_with_source(format!("Failed to connect to Redis: {e}"), e)
            })?;
        *guard = Some(manager.clone());
        Ok(manager)
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn connect(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| redis_error("PING", e))?;
        tracing::info!("connected to Redis cache backend");
        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        if self.connection.write().await.take().is_some() {
            tracing::info!("released Redis cache backend connection");
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| redis_error("GET", e))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs(ttl))
            .await
            .map_err(|e| redis_error("SET EX", e))
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.sadd::<_, _, i64>(key, member)
            .await
            .map(|_| ())
            .map_err(|e| redis_error("SADD", e))
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        conn.smembers::<_, Vec<String>>(key)
            .await
            .map_err(|e| redis_error("SMEMBERS", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        conn.del::<_, i64>(key)
            .await
            .map(|count| count > 0)
            .map_err(|e| redis_error("DEL", e))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut conn = self.connection().await?;
        let secs = i64::try_from(ttl_secs(ttl)).unwrap_or(i64::MAX);
        conn.expire::<_, bool>(key, secs)
            .await
            .map_err(|e| redis_error("EXPIRE", e))
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut conn = self.connection().await?;
        let entries: u64 = redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| redis_error("DBSIZE", e))?;
        Ok(CacheStats {
            entries,
            ..CacheStats::new()
        })
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheBackend")
            .field("server", &self.server)
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use crate::constants::REDIS_DEFAULT_URL;
use bookmatch_application::ports::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};

/// Factory function for creating Redis cache backend instances
fn redis_cache_factory(
    config: &CacheBackendConfig,
) -> std::result::Result<Arc<dyn CacheBackend>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);
    let backend =
        RedisCacheBackend::new(uri).map_err(|e| format!("Failed to create Redis backend: {e}"))?;
    Ok(Arc::new(backend))
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static REDIS_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
