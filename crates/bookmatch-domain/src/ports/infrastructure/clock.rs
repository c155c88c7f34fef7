use chrono::{DateTime, Utc};

/// Wall clock used for cache expiry decisions
///
/// Injected so expiry can be driven deterministically in tests.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}
