//! Recommendation cache lifecycle

use crate::support::{FailingBackend, UnindexableBackend, moka_cache};
use bookmatch_application::{RecommendationCache, cache_keys};
use bookmatch_domain::ports::{CacheBackend, Clock};
use bookmatch_domain::value_objects::{CacheLookup, ItemId, RecommendationItem, UserId};
use bookmatch_providers::cache::MokaCacheBackend;
use bookmatch_providers::clock::ManualClock;
use std::sync::Arc;
use std::time::Duration;

const HALF_HOUR: Duration = Duration::from_secs(1800);

fn items() -> Vec<RecommendationItem> {
    vec![
        RecommendationItem::new("b1", 1.2).with_reason("similar-taste"),
        RecommendationItem::new("b2", 0.4).with_reason("popular"),
    ]
}

#[test]
fn test_keys_are_deterministic() {
    let user = UserId::from("u1");
    assert_eq!(cache_keys::user(&user, 20, &[]), "recs:user:u1:n:20");
    assert_eq!(cache_keys::similar(&ItemId::from("b9"), 10), "recs:similar:b9:n:10");
    assert_eq!(cache_keys::fallback(20), "recs:fallback:n:20");
    assert_eq!(cache_keys::index(&user), "recs:index:user:u1");
    assert_ne!(
        cache_keys::user(&user, 20, &[]),
        cache_keys::user(&user, 10, &[])
    );
}

#[test]
fn test_seeded_keys_ignore_seed_order() {
    let user = UserId::from("u1");
    let forward = [ItemId::from("b2"), ItemId::from("b1")];
    let backward = [ItemId::from("b1"), ItemId::from("b2"), ItemId::from("b1")];

    assert_eq!(
        cache_keys::user(&user, 20, &forward),
        cache_keys::user(&user, 20, &backward)
    );
    assert_eq!(
        cache_keys::user(&user, 20, &forward),
        "recs:user:u1:n:20:seeds:b1,b2"
    );
}

#[tokio::test]
async fn test_put_then_get_round_trips() {
    let (cache, _backend, clock) = moka_cache();
    let written_at = clock.now();

    cache
        .put("recs:similar:b9:n:2", &items(), HALF_HOUR, None)
        .await
        .unwrap();

    match cache.get("recs:similar:b9:n:2").await.unwrap() {
        CacheLookup::Hit(entry) => {
            assert_eq!(entry.key, "recs:similar:b9:n:2");
            assert_eq!(entry.value, items());
            assert_eq!(entry.expires_at, written_at + chrono::Duration::seconds(1800));
        }
        CacheLookup::Miss => panic!("expected a hit"),
    }
}

#[tokio::test]
async fn test_absent_key_misses() {
    let (cache, _backend, _clock) = moka_cache();
    assert_eq!(cache.get("recs:user:nobody:n:20").await.unwrap(), CacheLookup::Miss);
}

#[tokio::test]
async fn test_entry_expires_by_clock() {
    let (cache, backend, clock) = moka_cache();
    let key = "recs:user:u1:n:20";
    cache.put(key, &items(), HALF_HOUR, None).await.unwrap();

    clock.advance(HALF_HOUR - Duration::from_secs(1));
    assert!(cache.get(key).await.unwrap().is_hit());

    clock.advance(Duration::from_secs(1));
    assert_eq!(cache.get(key).await.unwrap(), CacheLookup::Miss);
    // Lazily expired entries are purged from the backend
    assert!(backend.get(key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_put_registers_owner_index() {
    let (cache, backend, _clock) = moka_cache();
    let user = UserId::from("u1");
    let key = cache_keys::user(&user, 20, &[]);

    cache.put(&key, &items(), HALF_HOUR, Some(&user)).await.unwrap();

    let members = backend.set_members(&cache_keys::index(&user)).await.unwrap();
    assert_eq!(members, vec![key]);
}

#[tokio::test]
async fn test_invalidate_user_removes_only_owned_entries() {
    let (cache, _backend, _clock) = moka_cache();
    let user = UserId::from("u1");
    let other = UserId::from("u2");
    let k20 = cache_keys::user(&user, 20, &[]);
    let k5 = cache_keys::user(&user, 5, &[]);
    let other_key = cache_keys::user(&other, 20, &[]);
    let similar = cache_keys::similar(&ItemId::from("b1"), 10);

    cache.put(&k20, &items(), HALF_HOUR, Some(&user)).await.unwrap();
    cache.put(&k5, &items(), HALF_HOUR, Some(&user)).await.unwrap();
    cache.put(&other_key, &items(), HALF_HOUR, Some(&other)).await.unwrap();
    cache.put(&similar, &items(), HALF_HOUR, None).await.unwrap();

    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 2);

    assert_eq!(cache.get(&k20).await.unwrap(), CacheLookup::Miss);
    assert_eq!(cache.get(&k5).await.unwrap(), CacheLookup::Miss);
    assert!(cache.get(&other_key).await.unwrap().is_hit());
    assert!(cache.get(&similar).await.unwrap().is_hit());
}

#[tokio::test]
async fn test_invalidate_user_is_idempotent() {
    let (cache, backend, _clock) = moka_cache();
    let user = UserId::from("u1");
    let key = cache_keys::user(&user, 20, &[]);
    cache.put(&key, &items(), HALF_HOUR, Some(&user)).await.unwrap();

    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 1);
    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 0);
    assert!(
        backend
            .set_members(&cache_keys::index(&user))
            .await
            .unwrap()
            .is_empty()
    );

    // A user that never had anything cached
    assert_eq!(
        cache.invalidate_user(&UserId::from("fresh")).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_invalidate_skips_already_evicted_members() {
    let (cache, backend, _clock) = moka_cache();
    let user = UserId::from("u1");
    let key = cache_keys::user(&user, 20, &[]);
    cache.put(&key, &items(), HALF_HOUR, Some(&user)).await.unwrap();
    backend.delete(&key).await.unwrap();

    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 0);
}

#[tokio::test]
async fn test_undecodable_entry_is_a_miss() {
    let (cache, backend, _clock) = moka_cache();
    backend
        .set_with_ttl("recs:user:u1:n:20", "{not json", HALF_HOUR)
        .await
        .unwrap();

    assert_eq!(cache.get("recs:user:u1:n:20").await.unwrap(), CacheLookup::Miss);
    assert!(backend.get("recs:user:u1:n:20").await.unwrap().is_none());
}

#[tokio::test]
async fn test_namespace_prefixes_backend_keys() {
    let (cache, backend, _clock) = moka_cache();
    let cache = cache.with_namespace("bookmatch");
    let user = UserId::from("u1");
    let key = cache_keys::user(&user, 20, &[]);

    cache.put(&key, &items(), HALF_HOUR, Some(&user)).await.unwrap();

    assert!(backend.get(&format!("bookmatch:{key}")).await.unwrap().is_some());
    assert!(backend.get(&key).await.unwrap().is_none());
    assert!(cache.get(&key).await.unwrap().is_hit());
    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 1);
}

#[tokio::test]
async fn test_backend_errors_are_returned() {
    let cache = RecommendationCache::new(
        Arc::new(FailingBackend),
        Arc::new(ManualClock::starting_now()),
    );
    let user = UserId::from("u1");

    assert!(cache.get("k").await.unwrap_err().is_cache());
    assert!(cache.put("k", &items(), HALF_HOUR, Some(&user)).await.is_err());
    assert!(cache.invalidate_user(&user).await.is_err());
}

#[tokio::test]
async fn test_failed_index_registration_stores_no_entry() {
    let inner = Arc::new(MokaCacheBackend::new());
    let cache = RecommendationCache::new(
        Arc::new(UnindexableBackend(inner.clone())),
        Arc::new(ManualClock::starting_now()),
    );
    let user = UserId::from("u1");
    let key = cache_keys::user(&user, 20, &[]);

    assert!(cache.put(&key, &items(), HALF_HOUR, Some(&user)).await.is_err());

    assert!(inner.get(&key).await.unwrap().is_none());
    assert_eq!(cache.invalidate_user(&user).await.unwrap(), 0);
    assert_eq!(cache.get(&key).await.unwrap(), CacheLookup::Miss);
}

#[tokio::test]
async fn test_unowned_entries_skip_the_index() {
    let inner = Arc::new(MokaCacheBackend::new());
    let cache = RecommendationCache::new(
        Arc::new(UnindexableBackend(inner.clone())),
        Arc::new(ManualClock::starting_now()),
    );

    cache
        .put("recs:similar:b9:n:2", &items(), HALF_HOUR, None)
        .await
        .unwrap();

    assert!(cache.get("recs:similar:b9:n:2").await.unwrap().is_hit());
}
