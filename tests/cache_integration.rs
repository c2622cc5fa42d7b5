//! Integration tests for the instrumented cache wrapper
//!
//! These tests require a running Redis instance and flush its active
//! database, so they are ignored by default. Run them serially against a
//! throwaway instance:
//!
//!   REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored --test-threads=1

use cachetrace::{Cache, CacheConfig, Payload};

// Helper to get Redis connection details from environment or use defaults
fn get_redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

async fn fresh_cache(url: &str) -> Cache {
    let config = CacheConfig::builder()
        .redis_url(url)
        .clear_on_connect(true)
        .build();

    Cache::connect(config).await.expect("Failed to connect to Redis")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored --test-threads=1
async fn test_ping() {
    let cache = fresh_cache(&get_redis_url()).await;
    assert!(cache.client().ping().await.expect("PING failed"));
}

#[tokio::test]
#[ignore]
async fn test_roundtrip_all_payload_variants() {
    let mut cache = fresh_cache(&get_redis_url()).await;

    let key = cache.store("foo").await.unwrap();
    assert_eq!(cache.get(&key).await.unwrap(), Some(b"foo".to_vec()));
    assert_eq!(cache.get_str(&key).await.unwrap(), Some("foo".to_string()));

    let raw = vec![0xde, 0xad, 0xbe, 0xef];
    let key = cache.store(Payload::Bytes(raw.clone())).await.unwrap();
    assert_eq!(cache.get(&key).await.unwrap(), Some(raw));

    let key = cache.store(123i64).await.unwrap();
    assert_eq!(cache.get_int(&key).await.unwrap(), Some(123));
    assert_eq!(cache.get_str(&key).await.unwrap(), Some("123".to_string()));

    let key = cache.store(1.5f64).await.unwrap();
    assert_eq!(cache.get_str(&key).await.unwrap(), Some("1.5".to_string()));
}

#[tokio::test]
#[ignore]
async fn test_get_missing_key() {
    let cache = fresh_cache(&get_redis_url()).await;

    assert_eq!(cache.get("no-such-key").await.unwrap(), None);
    assert_eq!(cache.get_str("no-such-key").await.unwrap(), None);
    assert_eq!(cache.get_int("no-such-key").await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_counter_tracks_calls() {
    let mut cache = fresh_cache(&get_redis_url()).await;

    assert_eq!(cache.call_count().await.unwrap(), 0);

    for i in 0..5i64 {
        cache.store(i).await.unwrap();
    }

    assert_eq!(cache.call_count().await.unwrap(), 5);
}

#[tokio::test]
#[ignore]
async fn test_histories_in_lockstep() {
    let mut cache = fresh_cache(&get_redis_url()).await;

    let key_a = cache.store("a").await.unwrap();
    let key_b = cache.store("b").await.unwrap();
    let key_c = cache.store("c").await.unwrap();

    assert_eq!(cache.call_count().await.unwrap(), 3);

    let replay = cache.replay().await.unwrap();
    assert_eq!(replay.count, 3);
    assert_eq!(replay.len(), 3);

    // Inputs in call order, outputs equal to the generated keys in order.
    assert_eq!(replay.pairs[0], ("\"a\"".to_string(), key_a));
    assert_eq!(replay.pairs[1], ("\"b\"".to_string(), key_b));
    assert_eq!(replay.pairs[2], ("\"c\"".to_string(), key_c));
}

#[tokio::test]
#[ignore]
async fn test_replay_rendering() {
    let mut cache = fresh_cache(&get_redis_url()).await;

    cache.store("x").await.unwrap();
    cache.store(7i64).await.unwrap();

    let rendered = cache.replay().await.unwrap().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "cache.store was called 2 times:");
    assert!(lines[1].starts_with("cache.store(\"x\") -> "));
    assert!(lines[2].starts_with("cache.store(7) -> "));
}

#[tokio::test]
#[ignore]
async fn test_clear_on_reconnect() {
    let url = get_redis_url();

    let mut cache = fresh_cache(&url).await;
    let key = cache.store("survivor?").await.unwrap();
    assert!(cache.get(&key).await.unwrap().is_some());

    // Re-initializing with clear_on_connect drops all prior state.
    let cache = fresh_cache(&url).await;
    assert_eq!(cache.get(&key).await.unwrap(), None);
    assert_eq!(cache.call_count().await.unwrap(), 0);
    assert!(cache.replay().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_reconnect_without_clear_keeps_state() {
    let url = get_redis_url();

    let mut cache = fresh_cache(&url).await;
    let key = cache.store("kept").await.unwrap();

    let config = CacheConfig::builder().redis_url(&url).build();
    let cache = Cache::connect(config).await.unwrap();

    assert_eq!(cache.get_str(&key).await.unwrap(), Some("kept".to_string()));
    assert_eq!(cache.call_count().await.unwrap(), 1);
}

mod containerized {
    //! Same scenario against a throwaway Redis container.
    //! Requires a local Docker daemon.

    use super::*;
    use testcontainers::clients::Cli;
    use testcontainers_modules::redis::Redis;

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored (needs Docker)
    async fn test_store_scenario_in_container() {
        let docker = Cli::default();
        let node = docker.run(Redis::default());
        let url = format!("redis://127.0.0.1:{}", node.get_host_port_ipv4(6379));

        let mut cache = fresh_cache(&url).await;

        let key = cache.store("foo").await.unwrap();
        assert_eq!(cache.get_str(&key).await.unwrap(), Some("foo".to_string()));

        let key = cache.store(123i64).await.unwrap();
        assert_eq!(cache.get_int(&key).await.unwrap(), Some(123));

        assert_eq!(cache.call_count().await.unwrap(), 2);
        assert_eq!(cache.replay().await.unwrap().len(), 2);
    }
}
