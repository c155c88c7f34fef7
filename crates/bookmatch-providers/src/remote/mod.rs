//! Remote Recommendation Service Clients
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`HttpRemoteRecommender`] | JSON over HTTP, optional API key header |

pub mod http;

pub use http::HttpRemoteRecommender;
