//! In-memory catalog and vector store tests

use bookmatch_domain::ports::{CandidateSource, VectorStore};
use bookmatch_domain::value_objects::{CandidateFilter, CandidateItem, Fetched, ItemId, UserId};
use bookmatch_providers::catalog::{CatalogSeed, InMemoryCatalog};
use bookmatch_providers::vector_store::InMemoryVectorStore;

const SEED: &str = r#"{
    "items": [
        { "itemId": "b1", "averageRating": 4.5, "ratingCount": 12, "embedding": [1.0, 0.0] },
        { "itemId": "b2", "averageRating": 3.0, "ratingCount": 2, "public": false },
        { "itemId": "b3", "embedding": [0.0, 1.0] }
    ],
    "libraries": { "u1": ["b3", "b1", "b3"] }
}"#;

fn listed_ids(items: &[CandidateItem]) -> Vec<&str> {
    items.iter().map(|c| c.item_id.as_str()).collect()
}

#[test]
fn test_seed_parses_defaults() {
    let seed = CatalogSeed::from_json(SEED).unwrap();

    assert_eq!(seed.items.len(), 3);
    assert!(seed.items[0].public);
    assert!(!seed.items[1].public);
    assert_eq!(seed.items[2].rating_count, 0);
    assert!(seed.items[1].embedding.is_none());
}

#[test]
fn test_seed_rejects_malformed_json() {
    assert!(CatalogSeed::from_json("{ \"items\": 3 }").is_err());
}

#[tokio::test]
async fn test_catalog_lists_in_insertion_order_with_filters() {
    let seed = CatalogSeed::from_json(SEED).unwrap();
    let catalog = InMemoryCatalog::from_seed(&seed);

    let all = catalog
        .list_candidates(&CandidateFilter::default())
        .await
        .unwrap();
    assert_eq!(listed_ids(&all), vec!["b1", "b2", "b3"]);

    let public = catalog
        .list_candidates(&CandidateFilter::public())
        .await
        .unwrap();
    assert_eq!(listed_ids(&public), vec!["b1", "b3"]);

    let excluding = catalog
        .list_candidates(&CandidateFilter::public().excluding(ItemId::from("b1")))
        .await
        .unwrap();
    assert_eq!(listed_ids(&excluding), vec!["b3"]);
}

#[tokio::test]
async fn test_catalog_upsert_keeps_position() {
    let catalog = InMemoryCatalog::new();
    catalog.upsert_item(CandidateItem::new("a"), true);
    catalog.upsert_item(CandidateItem::new("b"), true);
    catalog.upsert_item(CandidateItem::new("a").with_ratings(5.0, 1), true);

    let listed = catalog
        .list_candidates(&CandidateFilter::default())
        .await
        .unwrap();
    assert_eq!(listed_ids(&listed), vec!["a", "b"]);
    assert_eq!(listed[0].rating_count, 1);
    assert_eq!(catalog.len(), 2);
}

#[tokio::test]
async fn test_catalog_user_items_deduplicated() {
    let seed = CatalogSeed::from_json(SEED).unwrap();
    let catalog = InMemoryCatalog::from_seed(&seed);

    let items = catalog.user_items(&UserId::from("u1")).await.unwrap();
    assert_eq!(items, vec![ItemId::from("b3"), ItemId::from("b1")]);

    let none = catalog.user_items(&UserId::from("nobody")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_vector_store_from_seed() {
    let seed = CatalogSeed::from_json(SEED).unwrap();
    let store = InMemoryVectorStore::from_seed(&seed);

    assert_eq!(store.len(), 2);
    match store.get_vector(&ItemId::from("b1")).await {
        Fetched::Found(v) => assert_eq!(v.as_slice(), &[1.0, 0.0]),
        other => panic!("expected vector, got {other:?}"),
    }
    assert_eq!(
        store.get_vector(&ItemId::from("b2")).await,
        Fetched::NotFound
    );
}
