//! # Instrumented Cache Wrapper
//!
//! A thin cache over a remote key-value store with three cross-cutting
//! behaviors layered around its store operation:
//!
//! - **Call counting**: one counter per tracked method, incremented per call
//! - **Call history**: parallel append-only lists of inputs and outputs
//! - **Replay**: ordered readback and rendering of the recorded history
//!
//! The instrumentation is an explicit middleware chain over the [`Store`]
//! trait rather than implicit decoration; see [`middleware`] for the layer
//! types and the key layout the metadata lives under.
//!
//! ## Example
//!
//! ```no_run
//! use cachetrace::cache::{Cache, Payload};
//! use cachetrace::CacheConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut cache = Cache::connect(CacheConfig::default()).await?;
//!
//! let key = cache.store(Payload::Int(123)).await?;
//! assert_eq!(cache.get_int(&key).await?, Some(123));
//!
//! let replay = cache.replay().await?;
//! print!("{}", replay);
//! # Ok(())
//! # }
//! ```

pub mod middleware;
pub mod payload;
pub mod replay;
pub mod store;

pub use middleware::{CallCount, CallHistory, Store};
pub use payload::Payload;
pub use replay::Replay;
pub use store::{Cache, RedisStore, STORE_METHOD};
