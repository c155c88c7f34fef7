//! User Taste Profile
//!
//! A profile is the coordinate-wise mean of the embeddings of the items a
//! user has rated, shelved or passed as seeds. It is recomputed per request
//! and never cached.

use std::sync::Arc;

use bookmatch_domain::error::{Error, Result};
use bookmatch_domain::ports::VectorStore;
use bookmatch_domain::value_objects::{EmbeddingVector, Fetched, ItemId};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// Concurrent vector lookups per profile build
const PROFILE_LOOKUP_CONCURRENCY: usize = 16;

/// Coordinate-wise mean of `vectors`
///
/// The first non-empty vector fixes the dimensionality; vectors of any other
/// length are skipped. Returns `None` when nothing usable remains.
pub fn mean_vector<'a, I>(vectors: I) -> Option<EmbeddingVector>
where
    I: IntoIterator<Item = &'a EmbeddingVector>,
{
    let mut sum: Vec<f64> = Vec::new();
    let mut count = 0usize;

    for vector in vectors {
        if vector.is_empty() {
            continue;
        }
        if count == 0 {
            sum = vec![0.0; vector.dimensions()];
        } else if vector.dimensions() != sum.len() {
            warn!(
                expected = sum.len(),
                actual = vector.dimensions(),
                "skipping embedding with mismatched dimensions"
            );
            continue;
        }
        for (acc, value) in sum.iter_mut().zip(vector.as_slice()) {
            *acc += f64::from(*value);
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(EmbeddingVector::new(
        sum.into_iter().map(|s| (s / n) as f32).collect(),
    ))
}

/// Builds taste profiles from the vector store
#[derive(Clone)]
pub struct ProfileAggregator {
    vector_store: Arc<dyn VectorStore>,
}

impl ProfileAggregator {
    /// Create an aggregator over `vector_store`
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    /// Mean embedding of `item_ids`, `None` for a cold-start user
    ///
    /// Items without a vector are ignored. The caller deduplicates the ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorStore`] when the store fails for any item, so the
    /// caller can fall back instead of ranking on a partial profile.
    pub async fn build_profile(&self, item_ids: &[ItemId]) -> Result<Option<EmbeddingVector>> {
        if item_ids.is_empty() {
            return Ok(None);
        }

        let lookups: Vec<(&ItemId, Fetched<EmbeddingVector>)> = stream::iter(item_ids)
            .map(|id| async move { (id, self.vector_store.get_vector(id).await) })
            .buffered(PROFILE_LOOKUP_CONCURRENCY)
            .collect()
            .await;

        let mut vectors = Vec::with_capacity(lookups.len());
        for (id, lookup) in lookups {
            match lookup {
                Fetched::Found(vector) => vectors.push(vector),
                Fetched::NotFound => debug!(item_id = %id, "item has no embedding yet"),
                Fetched::UpstreamFailure(cause) => {
                    return Err(Error::vector_store(format!(
                        "embedding lookup for {id} failed: {cause}"
                    )));
                }
            }
        }

        Ok(mean_vector(&vectors))
    }
}

impl std::fmt::Debug for ProfileAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileAggregator")
            .field("vector_store", &self.vector_store.provider_name())
            .finish()
    }
}
