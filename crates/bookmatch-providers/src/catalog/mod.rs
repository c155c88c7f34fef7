//! Item Catalog Implementations
//!
//! Read-side views of books, their rating aggregates and user libraries.
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryCatalog`] | Local | Concurrent maps, filled from a [`CatalogSeed`] |

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryCatalog;
pub use seed::{CatalogSeed, SeedItem};
