//! Configuration types module

pub mod app;
pub mod cache;
pub mod catalog;
pub mod logging;
pub mod recommendations;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use recommendations::{RecommendationsConfig, RemoteServiceConfig};
