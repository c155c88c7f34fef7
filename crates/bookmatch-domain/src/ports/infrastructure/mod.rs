//! Infrastructure Ports
//!
//! Technical services the domain depends on that are not external providers.

/// Clock port
pub mod clock;

pub use clock::Clock;
