//! Instrumented cache demo
//!
//! Exercises the cache wrapper end to end: stores a handful of payloads,
//! reads them back through the typed getters, and prints the recorded call
//! history. Clears the active database on connect, so every run starts
//! from an empty namespace.
//!
//! Usage:
//!   cargo run --bin cache_demo
//!
//! Environment variables:
//!   REDIS_URL - Redis connection URL (default: redis://127.0.0.1:6379)

use cachetrace::{Cache, CacheConfig, Payload};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut config = CacheConfig::from_env();
    config.clear_on_connect = true;

    let mut cache = Cache::connect(config).await?;
    assert!(cache.client().ping().await?);

    let key = cache.store("foo").await?;
    info!("Stored \"foo\" under {}", key);
    println!("get_str({}) = {:?}", key, cache.get_str(&key).await?);

    let key = cache.store(123i64).await?;
    println!("get_int({}) = {:?}", key, cache.get_int(&key).await?);

    let key = cache.store(Payload::Bytes(vec![0xde, 0xad, 0xbe, 0xef])).await?;
    println!("get({}) = {:?}", key, cache.get(&key).await?);

    let key = cache.store(1.5f64).await?;
    println!("get_str({}) = {:?}", key, cache.get_str(&key).await?);

    println!();
    print!("{}", cache.replay().await?);

    Ok(())
}
