//! Error handling types
//!
//! Only construction paths and infrastructure failures surface as [`Error`].
//! Request-time failures of the gateway never reach a caller: they degrade to
//! an uncached or popularity-only list instead.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the BookMatch recommendation layer
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure, with the operation that hit it
    #[error("I/O error: {message}")]
    Io {
        /// What was being read or written
        message: String,
        /// Underlying I/O error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Vector store lookup error
    #[error("Vector store error: {message}")]
    VectorStore {
        /// Description of the vector store error
        message: String,
    },

    /// Candidate source (item catalog) error
    #[error("Candidate source error: {message}")]
    Candidates {
        /// Description of the candidate source error
        message: String,
    },

    /// Invalid or unloadable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Parser or loader error, when there is one
        #[source]
        source: Option<BoxedSource>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a vector store error
    pub fn vector_store<S: Into<String>>(message: S) -> Self {
        Self::VectorStore {
            message: message.into(),
        }
    }

    /// Create a candidate source error
    pub fn candidates<S: Into<String>>(message: S) -> Self {
        Self::Candidates {
            message: message.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for errors raised by the cache backend
    pub fn is_cache(&self) -> bool {
        matches!(self, Self::Cache { .. })
    }
}
