//! Profile aggregation against a vector store

use crate::support::FailingVectorStore;
use bookmatch_application::ProfileAggregator;
use bookmatch_domain::value_objects::ItemId;
use bookmatch_providers::vector_store::InMemoryVectorStore;
use std::sync::Arc;

fn item_ids(ids: &[&str]) -> Vec<ItemId> {
    ids.iter().map(|id| ItemId::from(*id)).collect()
}

#[tokio::test]
async fn test_empty_input_has_no_profile() {
    let aggregator = ProfileAggregator::new(Arc::new(InMemoryVectorStore::new()));
    assert!(aggregator.build_profile(&[]).await.unwrap().is_none());
}

#[tokio::test]
async fn test_items_without_vectors_have_no_profile() {
    let aggregator = ProfileAggregator::new(Arc::new(InMemoryVectorStore::new()));
    let profile = aggregator
        .build_profile(&item_ids(&["x", "y"]))
        .await
        .unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_profile_is_coordinate_mean() {
    let store = InMemoryVectorStore::new();
    store.insert("a", vec![1.0, 0.0]);
    store.insert("b", vec![0.0, 1.0]);
    let aggregator = ProfileAggregator::new(Arc::new(store));

    let profile = aggregator
        .build_profile(&item_ids(&["a", "b", "unembedded"]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(profile.dimensions(), 2);
    assert_eq!(profile.as_slice(), &[0.5, 0.5]);
}

#[tokio::test]
async fn test_profile_over_many_items_keeps_dimension() {
    let store = InMemoryVectorStore::new();
    let ids: Vec<ItemId> = (0..50).map(|i| ItemId::new(format!("b{i}"))).collect();
    for id in &ids {
        store.insert(id.clone(), vec![2.0, 4.0, 6.0]);
    }
    let aggregator = ProfileAggregator::new(Arc::new(store));

    let profile = aggregator.build_profile(&ids).await.unwrap().unwrap();

    assert_eq!(profile.as_slice(), &[2.0, 4.0, 6.0]);
}

#[tokio::test]
async fn test_store_failure_is_an_error() {
    let aggregator = ProfileAggregator::new(Arc::new(FailingVectorStore));
    let err = aggregator
        .build_profile(&item_ids(&["a"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("vector index offline"));
}
