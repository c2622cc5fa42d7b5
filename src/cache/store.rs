//! Instrumented cache over the backing key-value store
//!
//! [`RedisStore`] is the innermost storage layer: it generates a fresh key,
//! writes the payload, and returns the key. [`Cache`] is the public facade
//! that wires the instrumentation chain around it and exposes retrieval,
//! counter readback, replay, and clearing.

use crate::cache::middleware::{counter_key, CallCount, CallHistory, Store};
use crate::cache::payload::Payload;
use crate::cache::replay::Replay;
use crate::config::CacheConfig;
use crate::connection::RedisClient;
use crate::error::Result;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::{debug, info};
use uuid::Uuid;

/// Tracked method name for the store operation
pub const STORE_METHOD: &str = "cache.store";

/// Innermost storage layer: fresh uuid key, SET, return the key
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Create a store over the given connection
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn store(&mut self, payload: &Payload) -> Result<String> {
        // v4 uuid; collision probability treated as zero.
        let key = Uuid::new_v4().to_string();

        let _: () = self.conn.set(&key, payload.encode()).await?;
        debug!("Stored payload under {}", key);

        Ok(key)
    }
}

/// Instrumented cache wrapper
///
/// Every `store` call runs through the middleware chain
/// `CallCount -> CallHistory -> RedisStore`, so the invocation counter is
/// incremented and both history lists are appended transparently.
///
/// # Example
/// ```no_run
/// use cachetrace::{Cache, CacheConfig};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = CacheConfig::builder().clear_on_connect(true).build();
///     let mut cache = Cache::connect(config).await?;
///
///     let key = cache.store("foo").await?;
///     assert_eq!(cache.get_str(&key).await?, Some("foo".to_string()));
///
///     println!("{}", cache.replay().await?);
///     Ok(())
/// }
/// ```
pub struct Cache {
    client: RedisClient,
    chain: CallCount<CallHistory<RedisStore>>,
}

impl Cache {
    /// Connect to the backing store using the given configuration
    ///
    /// When `config.clear_on_connect` is set, the active database is
    /// flushed before the cache is handed out. This removes every key,
    /// including prior histories and counters, and cannot be undone.
    pub async fn connect(config: CacheConfig) -> Result<Self> {
        let client = RedisClient::connect(&config).await?;

        if config.clear_on_connect {
            client.flushdb().await?;
        }

        let conn = client.connection();
        let store = RedisStore::new(conn.clone());
        let chain = CallCount::new(
            CallHistory::new(store, conn.clone(), STORE_METHOD),
            conn,
            STORE_METHOD,
        );

        info!("Cache ready (tracked method: {})", STORE_METHOD);

        Ok(Self { client, chain })
    }

    /// Store a payload under a fresh key and return the key
    pub async fn store(&mut self, payload: impl Into<Payload>) -> Result<String> {
        let payload = payload.into();
        self.chain.store(&payload).await
    }

    /// Fetch the raw bytes stored under `key`
    ///
    /// An absent key is the backing store's nil reply, surfaced as
    /// `Ok(None)`.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.client.connection();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    /// Fetch and transform the value stored under `key`
    ///
    /// The transform only runs when the key is present.
    pub async fn get_with<T>(
        &self,
        key: &str,
        transform: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.get(key).await? {
            Some(bytes) => Ok(Some(transform(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Fetch the value stored under `key` as UTF-8 text
    pub async fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, Payload::decode_text).await
    }

    /// Fetch the value stored under `key` as a decimal integer
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, Payload::decode_int).await
    }

    /// Read the invocation counter for the tracked store method
    ///
    /// Returns 0 when the counter key does not exist yet.
    pub async fn call_count(&self) -> Result<u64> {
        let mut conn = self.client.connection();
        let count: Option<u64> = conn.get(counter_key(STORE_METHOD)).await?;
        Ok(count.unwrap_or(0))
    }

    /// Read the recorded call history for the tracked store method
    pub async fn replay(&self) -> Result<Replay> {
        Replay::read(self.client.connection(), STORE_METHOD).await
    }

    /// Flush the active database, dropping all keys, histories, and counters
    pub async fn clear(&self) -> Result<()> {
        self.client.flushdb().await
    }

    /// Access the underlying Redis client
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}
