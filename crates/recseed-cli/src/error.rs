//! Error types for the recseed CLI
//!
//! User-facing errors with actionable messages. The one recoverable case is
//! [`SeedError::Conflict`]: the schema synchronizer maps it to "already
//! exists" and keeps going; everything else aborts the run.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, SeedError>;

/// Error type for seeding operations
#[derive(Error, Debug)]
pub enum SeedError {
    /// The remote catalog already has an entity with this name (HTTP 409)
    #[error("Already exists: {0}")]
    Conflict(String),

    /// Any other non-success response from the catalog API
    #[error("Catalog API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport failed
    #[error("Network request failed: {0}. Check your connection and the API URL.")]
    Http(#[from] reqwest::Error),

    /// CSV source could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and read permissions.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// JSON (de)serialization failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeedError {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is the recoverable "already exists" conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
