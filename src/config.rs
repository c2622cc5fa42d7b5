//! Configuration for the cache wrapper and the log statistics reporter
//!
//! Service endpoints, namespaces, and the destructive database flush are
//! explicit configuration inputs. The flush is opt-in, and every field has
//! a local-default value so both components run against a stock local
//! setup with no configuration at all.

use crate::error::{CacheTraceError, Result};
use serde::{Deserialize, Serialize};

/// Default Redis endpoint (stock local instance)
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default MongoDB endpoint (stock local instance)
pub const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017";

/// Configuration for the instrumented cache wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379")
    pub redis_url: String,

    /// Flush the active database on connect. Destructive and
    /// non-recoverable; off by default.
    pub clear_on_connect: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
            clear_on_connect: false,
        }
    }
}

impl CacheConfig {
    /// Create a new builder for cache configuration
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Load configuration from the environment (`REDIS_URL`,
    /// `CACHE_CLEAR_ON_CONNECT`), falling back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        let clear_on_connect = std::env::var("CACHE_CLEAR_ON_CONNECT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            redis_url,
            clear_on_connect,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.redis_url.is_empty() {
            return Err(CacheTraceError::ConfigError(
                "redis_url must not be empty".to_string(),
            ));
        }

        if !self.redis_url.starts_with("redis://") && !self.redis_url.starts_with("rediss://") {
            return Err(CacheTraceError::ConfigError(format!(
                "redis_url must start with redis:// or rediss://, got: {}",
                self.redis_url
            )));
        }

        Ok(())
    }
}

/// Builder for cache configuration
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    redis_url: Option<String>,
    clear_on_connect: Option<bool>,
}

impl CacheConfigBuilder {
    /// Set the Redis connection URL
    pub fn redis_url(mut self, url: impl Into<String>) -> Self {
        self.redis_url = Some(url.into());
        self
    }

    /// Enable or disable flushing the database on connect
    pub fn clear_on_connect(mut self, clear: bool) -> Self {
        self.clear_on_connect = Some(clear);
        self
    }

    /// Build the cache configuration
    pub fn build(self) -> CacheConfig {
        let defaults = CacheConfig::default();

        CacheConfig {
            redis_url: self.redis_url.unwrap_or(defaults.redis_url),
            clear_on_connect: self.clear_on_connect.unwrap_or(defaults.clear_on_connect),
        }
    }
}

/// Configuration for the log statistics reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogStatsConfig {
    /// MongoDB connection URI (e.g. "mongodb://127.0.0.1:27017")
    pub mongo_uri: String,

    /// Database holding the log records
    pub database: String,

    /// Collection holding the log records
    pub collection: String,

    /// Path value for the status-check count query
    pub status_path: String,
}

impl Default for LogStatsConfig {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            database: "logs".to_string(),
            collection: "nginx".to_string(),
            status_path: "/status".to_string(),
        }
    }
}

impl LogStatsConfig {
    /// Load configuration from the environment (`MONGO_URI`, `MONGO_DATABASE`,
    /// `MONGO_COLLECTION`, `STATUS_PATH`), falling back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            mongo_uri: std::env::var("MONGO_URI").unwrap_or(defaults.mongo_uri),
            database: std::env::var("MONGO_DATABASE").unwrap_or(defaults.database),
            collection: std::env::var("MONGO_COLLECTION").unwrap_or(defaults.collection),
            status_path: std::env::var("STATUS_PATH").unwrap_or(defaults.status_path),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.mongo_uri.is_empty() {
            return Err(CacheTraceError::ConfigError(
                "mongo_uri must not be empty".to_string(),
            ));
        }

        if self.database.is_empty() || self.collection.is_empty() {
            return Err(CacheTraceError::ConfigError(
                "database and collection must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
