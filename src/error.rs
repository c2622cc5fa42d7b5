//! Error types for cachetrace operations
//!
//! This module defines the error type shared by the instrumented cache
//! wrapper and the log statistics reporter.

use thiserror::Error;

/// Main error type for cachetrace operations
#[derive(Error, Debug)]
pub enum CacheTraceError {
    /// Connection error - network or handshake issues
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A stored value could not be decoded to the requested type
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Redis driver error (wrapper)
    #[error("Redis driver error: {0}")]
    RedisError(#[from] redis::RedisError),

    /// MongoDB driver error (wrapper)
    #[error("MongoDB driver error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for cachetrace operations
pub type Result<T> = std::result::Result<T, CacheTraceError>;

impl From<String> for CacheTraceError {
    fn from(s: String) -> Self {
        CacheTraceError::Other(s)
    }
}

impl From<&str> for CacheTraceError {
    fn from(s: &str) -> Self {
        CacheTraceError::Other(s.to_string())
    }
}
