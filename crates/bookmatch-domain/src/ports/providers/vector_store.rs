use crate::value_objects::{EmbeddingVector, Fetched, ItemId};
use async_trait::async_trait;

/// Item Embedding Store
///
/// Persistent mapping from catalog item to its content embedding. Vectors are
/// written by a background embedding step that this layer does not own, so
/// an item may legitimately have no vector yet.
///
/// # Example
///
/// ```ignore
/// use bookmatch_domain::value_objects::Fetched;
///
/// match store.get_vector(&item_id).await {
///     Fetched::Found(v) => println!("{} dims", v.dimensions()),
///     Fetched::NotFound => println!("not embedded yet"),
///     Fetched::UpstreamFailure(cause) => eprintln!("store down: {cause}"),
/// }
/// ```
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Look up the embedding of `item_id`
    async fn get_vector(&self, item_id: &ItemId) -> Fetched<EmbeddingVector>;

    /// Get the name/identifier of this vector store
    fn provider_name(&self) -> &str;
}
