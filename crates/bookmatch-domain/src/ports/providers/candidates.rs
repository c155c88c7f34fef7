use crate::error::Result;
use crate::value_objects::{CandidateFilter, CandidateItem, ItemId, UserId};
use async_trait::async_trait;

/// Item Catalog Port
///
/// Read-side view of the relational book/rating store: the candidate pool
/// with its engagement signal, and the items each user has engaged with.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// List candidate items matching `filter`, in a stable order
    async fn list_candidates(&self, filter: &CandidateFilter) -> Result<Vec<CandidateItem>>;

    /// Items the user has rated or shelved, deduplicated, first interaction first
    async fn user_items(&self, user_id: &UserId) -> Result<Vec<ItemId>>;

    /// Get the name/identifier of this source
    fn provider_name(&self) -> &str;
}
