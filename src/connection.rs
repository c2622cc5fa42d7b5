//! Redis connection management
//!
//! This module provides the low-level client shared by the cache wrapper:
//! connection setup, a PING health probe, and the database flush used by
//! the opt-in clear behavior.

use crate::config::CacheConfig;
use crate::error::{CacheTraceError, Result};
use redis::aio::MultiplexedConnection;
use tracing::{debug, info, warn};

/// Low-level Redis client
///
/// Wraps a multiplexed async connection. The connection handle is cheap to
/// clone; every clone shares the same underlying socket.
#[derive(Clone)]
pub struct RedisClient {
    conn: MultiplexedConnection,
}

impl RedisClient {
    /// Connect to Redis using the given configuration
    ///
    /// # Example
    /// ```no_run
    /// use cachetrace::{CacheConfig, RedisClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let config = CacheConfig::default();
    ///     let client = RedisClient::connect(&config).await?;
    ///     assert!(client.ping().await?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn connect(config: &CacheConfig) -> Result<Self> {
        config.validate()?;

        info!("Connecting to Redis at {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.as_str())
            .map_err(|e| CacheTraceError::ConfigError(e.to_string()))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheTraceError::ConnectionError(e.to_string()))?;

        info!("Successfully connected to Redis");

        Ok(Self { conn })
    }

    /// Health probe using PING
    ///
    /// The cheapest server round trip; returns `Ok(true)` when the server
    /// answers PONG.
    pub async fn ping(&self) -> Result<bool> {
        debug!("Executing health probe (PING)");

        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheTraceError::ConnectionError(e.to_string()))?;

        if reply != "PONG" {
            warn!("Unexpected PING reply: {}", reply);
            return Ok(false);
        }

        debug!("Health probe passed");
        Ok(true)
    }

    /// Flush the active database
    ///
    /// Removes every key in the current namespace, including histories and
    /// counters. Non-recoverable.
    pub async fn flushdb(&self) -> Result<()> {
        warn!("Flushing active Redis database");

        let mut conn = self.conn.clone();
        let _: () = redis::cmd("FLUSHDB").query_async(&mut conn).await?;

        info!("Active Redis database flushed");
        Ok(())
    }

    /// Get a clone of the underlying multiplexed connection
    ///
    /// This allows direct access to the redis driver for custom commands.
    pub fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}
