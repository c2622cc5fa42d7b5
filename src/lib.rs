//! # cachetrace
//!
//! Two small, independent consumers of external data stores:
//!
//! - An **instrumented cache wrapper** over a remote key-value store
//!   (Redis). Storing a payload generates a fresh uuid key and records
//!   usage metadata transparently through a middleware chain: a per-method
//!   invocation counter and parallel input/output history lists, which can
//!   be replayed in original call order.
//! - A **log statistics reporter** over a remote document store (MongoDB),
//!   issuing a fixed set of count queries over nginx-style log documents
//!   and rendering a fixed-format report.
//!
//! All persistence, indexing, and network handling is delegated to the
//! backing services; this crate is a thin, instrumented client layer.
//!
//! ## Instrumented cache
//!
//! ```no_run
//! use cachetrace::{Cache, CacheConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = CacheConfig::builder()
//!         .redis_url("redis://127.0.0.1:6379")
//!         .clear_on_connect(true)
//!         .build();
//!     let mut cache = Cache::connect(config).await?;
//!
//!     let key = cache.store("foo").await?;
//!     assert_eq!(cache.get_str(&key).await?, Some("foo".to_string()));
//!     assert_eq!(cache.call_count().await?, 1);
//!
//!     print!("{}", cache.replay().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Log statistics
//!
//! ```no_run
//! use cachetrace::{LogStats, LogStatsConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let stats = LogStats::connect(&LogStatsConfig::default()).await?;
//!     print!("{}", stats.report().await?);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod connection;
pub mod error;
pub mod stats;

// Re-export main types for convenience
pub use cache::{Cache, CallCount, CallHistory, Payload, RedisStore, Replay, Store, STORE_METHOD};
pub use config::{CacheConfig, CacheConfigBuilder, LogStatsConfig};
pub use connection::RedisClient;
pub use error::{CacheTraceError, Result};
pub use stats::{HttpMethod, LogReport, LogStats};
