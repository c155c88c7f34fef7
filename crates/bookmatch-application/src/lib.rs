//! Application Layer - BookMatch Recommendations
//!
//! Ranking, caching and serving logic of the recommendation layer, written
//! against the port traits of `bookmatch-domain` only.
//!
//! ## Architecture
//!
//! - `domain_services`: pure ranking pieces (profile, scoring, ranking)
//! - `use_cases`: the recommendation cache and the gateway that serves requests
//! - `ports::registry`: link-time registry of cache backends
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `bookmatch-domain`: value objects, errors and port traits
//! - Pure Rust libraries for async, serialization and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
