use crate::value_objects::{Fetched, ItemId, RecommendationItem, UserId};
use async_trait::async_trait;

/// Remote Recommendation Service Port
///
/// A separately deployed ranking service (collaborative filtering model).
/// Implementations apply no timeout of their own beyond transport defaults;
/// the gateway bounds every call.
#[async_trait]
pub trait RemoteRecommender: Send + Sync {
    /// Top `n` recommendations for a user
    async fn user_top(&self, user_id: &UserId, n: usize) -> Fetched<Vec<RecommendationItem>>;

    /// Top `n` items similar to `item_id`
    async fn similar(&self, item_id: &ItemId, n: usize) -> Fetched<Vec<RecommendationItem>>;

    /// Get the name/identifier of this service client
    fn provider_name(&self) -> &str;
}
