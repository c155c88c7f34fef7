//! Unit tests for recommendation value objects

use bookmatch_domain::value_objects::{
    CacheEntry, CacheLookup, CandidateItem, Fetched, ItemId, RecommendationItem,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_recommendation_item_wire_shape() {
    let item = RecommendationItem::new("b-1", 0.75).with_reason("cf:als");
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"itemId": "b-1", "score": 0.75, "reason": "cf:als"})
    );
}

#[test]
fn test_recommendation_item_reason_is_optional() {
    let item: RecommendationItem =
        serde_json::from_str(r#"{"itemId":"b-2","score":1.25}"#).unwrap();
    assert_eq!(item.item_id, ItemId::from("b-2"));
    assert!(item.reason.is_none());
}

#[test]
fn test_recommendation_item_rejects_legacy_shape() {
    let parsed = serde_json::from_str::<RecommendationItem>(r#"{"bookId":"b-2","score":1.0}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_cache_entry_expiry_boundary() {
    let expires_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let entry = CacheEntry {
        key: "recs:user:u1:n:10".to_string(),
        value: vec![],
        expires_at,
    };
    assert!(!entry.is_expired_at(expires_at - Duration::seconds(1)));
    assert!(entry.is_expired_at(expires_at));
}

#[test]
fn test_cache_lookup_into_items() {
    let entry = CacheEntry {
        key: "k".to_string(),
        value: vec![RecommendationItem::new("b-1", 1.0)],
        expires_at: Utc::now(),
    };
    assert_eq!(CacheLookup::Hit(entry).into_items().map(|v| v.len()), Some(1));
    assert_eq!(CacheLookup::Miss.into_items(), None);
}

#[test]
fn test_fetched_map_preserves_variant() {
    let found: Fetched<u32> = Fetched::Found(2);
    assert_eq!(found.map(|v| v * 2), Fetched::Found(4));

    let failed: Fetched<u32> = Fetched::failure("timeout");
    assert_eq!(
        failed.map(|v| v * 2),
        Fetched::UpstreamFailure("timeout".to_string())
    );
    assert!(Fetched::<u32>::NotFound.found().is_none());
}

#[test]
fn test_candidate_builder() {
    let c = CandidateItem::new("b-9")
        .with_ratings(4.5, 12)
        .with_embedding(vec![1.0, 0.0]);
    assert_eq!(c.rating_count, 12);
    assert_eq!(c.embedding.map(|e| e.dimensions()), Some(2));
}
