//! Clock Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`SystemClock`] | Wall clock |
//! | [`ManualClock`] | Settable clock for driving cache expiry in tests |

pub mod manual;
pub mod system;

pub use manual::ManualClock;
pub use system::SystemClock;
