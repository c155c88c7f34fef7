//! Explicit outcome of a collaborator lookup
//!
//! Collaborators that can legitimately have nothing to return (an item with
//! no embedding yet, an unknown user on the remote service) report it as
//! `NotFound`, distinct from an `UpstreamFailure`. Callers match on all three
//! so an absence is never mistaken for an outage or the other way round.

use serde::{Deserialize, Serialize};

/// Outcome of a lookup against a collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fetched<T> {
    /// The collaborator returned a value
    Found(T),
    /// The collaborator answered, and has nothing for this key
    NotFound,
    /// The collaborator could not answer (timeout, transport, bad payload)
    UpstreamFailure(String),
}

impl<T> Fetched<T> {
    /// Build an upstream failure from any displayable cause
    pub fn failure(cause: impl std::fmt::Display) -> Self {
        Self::UpstreamFailure(cause.to_string())
    }

    /// Map the found value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Self::Found(v) => Fetched::Found(f(v)),
            Self::NotFound => Fetched::NotFound,
            Self::UpstreamFailure(cause) => Fetched::UpstreamFailure(cause),
        }
    }

    /// The found value, if any
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    /// True for `Found`
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// True for `UpstreamFailure`
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure(_))
    }
}
