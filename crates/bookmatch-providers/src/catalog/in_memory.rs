//! In-memory item catalog
//!
//! Candidates are listed in insertion order so ranking ties stay
//! reproducible.

use super::CatalogSeed;
use async_trait::async_trait;
use bookmatch_domain::error::Result;
use bookmatch_domain::ports::CandidateSource;
use bookmatch_domain::value_objects::{CandidateFilter, CandidateItem, ItemId, UserId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone)]
struct CatalogEntry {
    seq: u64,
    candidate: CandidateItem,
    public: bool,
}

/// In-memory catalog of items and user libraries
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    items: Arc<DashMap<ItemId, CatalogEntry>>,
    libraries: Arc<DashMap<UserId, Vec<ItemId>>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the items and libraries of `seed`
    pub fn from_seed(seed: &CatalogSeed) -> Self {
        let catalog = Self::new();
        for item in &seed.items {
            catalog.upsert_item(item.to_candidate(), item.public);
        }
        for (user_id, items) in &seed.libraries {
            for item_id in items {
                catalog.record_interaction(user_id, item_id.clone());
            }
        }
        catalog
    }

    /// Insert an item, or replace it in place keeping its listing position
    pub fn upsert_item(&self, candidate: CandidateItem, public: bool) {
        match self.items.entry(candidate.item_id.clone()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.candidate = candidate;
                entry.public = public;
            }
            Entry::Vacant(vacant) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(CatalogEntry {
                    seq,
                    candidate,
                    public,
                });
            }
        }
    }

    /// Remove an item from the catalog
    pub fn remove_item(&self, item_id: &ItemId) -> bool {
        self.items.remove(item_id).is_some()
    }

    /// Record that `user_id` rated or shelved `item_id`
    ///
    /// Repeated interactions with one item are recorded once.
    pub fn record_interaction(&self, user_id: &UserId, item_id: ItemId) {
        let mut library = self.libraries.entry(user_id.clone()).or_default();
        if !library.contains(&item_id) {
            library.push(item_id);
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CandidateSource for InMemoryCatalog {
    async fn list_candidates(&self, filter: &CandidateFilter) -> Result<Vec<CandidateItem>> {
        let mut listed: Vec<(u64, CandidateItem)> = self
            .items
            .iter()
            .filter(|entry| !filter.public_only || entry.public)
            .filter(|entry| !filter.exclude.contains(entry.key()))
            .map(|entry| (entry.seq, entry.candidate.clone()))
            .collect();
        listed.sort_by_key(|(seq, _)| *seq);
        Ok(listed.into_iter().map(|(_, candidate)| candidate).collect())
    }

    async fn user_items(&self, user_id: &UserId) -> Result<Vec<ItemId>> {
        Ok(self
            .libraries
            .get(user_id)
            .map(|library| library.value().clone())
            .unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

impl std::fmt::Debug for InMemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCatalog")
            .field("items", &self.items.len())
            .field("libraries", &self.libraries.len())
            .finish()
    }
}
