//! # BookMatch Domain
//!
//! Core types, errors and port traits of the recommendation serving layer.
//! This crate has no I/O of its own; every collaborator is reached through a
//! trait in [`ports`].

/// Scoring and caching design defaults
pub mod constants;
/// Error types
pub mod error;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
