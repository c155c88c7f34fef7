//! In-memory vector store
//!
//! Item embeddings held in a concurrent map. Data is not persisted.

use crate::catalog::CatalogSeed;
use async_trait::async_trait;
use bookmatch_domain::ports::VectorStore;
use bookmatch_domain::value_objects::{EmbeddingVector, Fetched, ItemId};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory vector store
#[derive(Clone, Default)]
pub struct InMemoryVectorStore {
    vectors: Arc<DashMap<ItemId, EmbeddingVector>>,
}

impl InMemoryVectorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding every embedding of `seed`
    pub fn from_seed(seed: &CatalogSeed) -> Self {
        let store = Self::new();
        for item in &seed.items {
            if let Some(embedding) = &item.embedding {
                store.insert(item.item_id.clone(), embedding.clone());
            }
        }
        store
    }

    /// Store or replace the embedding of `item_id`
    pub fn insert(&self, item_id: impl Into<ItemId>, embedding: impl Into<EmbeddingVector>) {
        self.vectors.insert(item_id.into(), embedding.into());
    }

    /// Remove the embedding of `item_id`
    pub fn remove(&self, item_id: &ItemId) -> Option<EmbeddingVector> {
        self.vectors.remove(item_id).map(|(_, v)| v)
    }

    /// Number of stored embeddings
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn get_vector(&self, item_id: &ItemId) -> Fetched<EmbeddingVector> {
        match self.vectors.get(item_id) {
            Some(entry) => Fetched::Found(entry.value().clone()),
            None => Fetched::NotFound,
        }
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

impl std::fmt::Debug for InMemoryVectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryVectorStore")
            .field("vectors", &self.vectors.len())
            .finish()
    }
}
