//! Configuration
//!
//! Typed configuration sections and the figment-based loader that merges
//! defaults, a TOML file and `BOOKMATCH_` environment overrides.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::*;
