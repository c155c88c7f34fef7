//! Vector Store Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryVectorStore`] | Local | Concurrent map, filled from a catalog seed or by the embedding step |

pub mod in_memory;

pub use in_memory::InMemoryVectorStore;
