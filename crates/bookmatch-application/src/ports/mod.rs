//! Application Ports
//!
//! Port traits live in `bookmatch-domain`; this module re-exports them and
//! adds the provider registry the entry point resolves backends from.

/// Provider registries
pub mod registry;

pub use bookmatch_domain::ports::*;
pub use registry::*;
