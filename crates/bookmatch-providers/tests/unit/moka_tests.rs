//! Moka Cache Backend Tests

use bookmatch_domain::ports::CacheBackend;
use bookmatch_providers::cache::MokaCacheBackend;
use std::time::Duration;

#[tokio::test]
async fn test_moka_backend_basic_operations() {
    let backend = MokaCacheBackend::new();

    backend
        .set_with_ttl("recs:user:u1:n:20", "[1,2]", Duration::from_secs(60))
        .await
        .unwrap();

    assert_eq!(
        backend.get("recs:user:u1:n:20").await.unwrap(),
        Some("[1,2]".to_string())
    );
    assert!(backend.delete("recs:user:u1:n:20").await.unwrap());
    assert!(backend.get("recs:user:u1:n:20").await.unwrap().is_none());
    assert!(!backend.delete("recs:user:u1:n:20").await.unwrap());
}

#[tokio::test]
async fn test_moka_backend_entry_expires_after_ttl() {
    let backend = MokaCacheBackend::new();

    backend
        .set_with_ttl("short", "v", Duration::from_millis(50))
        .await
        .unwrap();
    backend
        .set_with_ttl("long", "v", Duration::from_secs(60))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(backend.get("short").await.unwrap().is_none());
    assert_eq!(backend.get("long").await.unwrap(), Some("v".to_string()));
}

#[tokio::test]
async fn test_moka_backend_set_operations() {
    let backend = MokaCacheBackend::new();

    backend.set_add("index", "b").await.unwrap();
    backend.set_add("index", "a").await.unwrap();
    backend.set_add("index", "b").await.unwrap();

    let mut members = backend.set_members("index").await.unwrap();
    members.sort();
    assert_eq!(members, vec!["a".to_string(), "b".to_string()]);

    assert!(backend.set_members("missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_moka_backend_expire_applies_to_sets() {
    let backend = MokaCacheBackend::new();

    backend.set_add("index", "k1").await.unwrap();
    assert!(
        backend
            .expire("index", Duration::from_millis(50))
            .await
            .unwrap()
    );
    // Adding a member keeps the TTL set above
    backend.set_add("index", "k2").await.unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(backend.set_members("index").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_moka_backend_expire_missing_key() {
    let backend = MokaCacheBackend::new();
    assert!(
        !backend
            .expire("missing", Duration::from_secs(5))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_moka_backend_rejects_wrong_type() {
    let backend = MokaCacheBackend::new();

    backend
        .set_with_ttl("text", "v", Duration::from_secs(60))
        .await
        .unwrap();
    backend.set_add("set", "m").await.unwrap();

    let err = backend.set_add("text", "m").await.unwrap_err();
    assert!(err.is_cache());
    assert!(backend.get("set").await.is_err());
    assert!(backend.set_members("text").await.is_err());
}

#[tokio::test]
async fn test_moka_backend_stats_track_lookups() {
    let backend = MokaCacheBackend::with_capacity(100);

    backend
        .set_with_ttl("k", "v", Duration::from_secs(60))
        .await
        .unwrap();
    backend.get("k").await.unwrap();
    backend.get("absent").await.unwrap();

    let stats = backend.stats().await.unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
    assert_eq!(backend.max_capacity(), 100);
    assert_eq!(backend.provider_name(), "moka");
}
