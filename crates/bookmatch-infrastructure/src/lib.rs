//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the recommendation layer.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration (figment) |
//! | [`constants`] | Config file names, env prefixes, logging defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Builds the cache backend, providers and gateway from config |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
