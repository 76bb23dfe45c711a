//! Error types for evolution-client

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connect, timeout, TLS)
    #[error("network error: {0}")]
    Network(String),

    /// Gateway returned a non-success HTTP status
    #[error("api error: {0}")]
    Api(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
