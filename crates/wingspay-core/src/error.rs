//! Error types for the WingsPay landing site

use thiserror::Error;

/// Main error type for landing site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Persistent storage is unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// A document/DOM operation failed (missing element, rejected call)
    #[error("DOM error: {0}")]
    Dom(String),

    /// Site configuration failed validation
    #[error("Invalid config: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
