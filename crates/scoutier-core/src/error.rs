//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The ingested file yielded no valid email address.
    #[error("No valid emails found in {name}")]
    EmptyResult {
        /// Display name of the file that was scanned.
        name: String,
    },

    /// The uploaded file is not a CSV, Excel or plain text file.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Reading the uploaded file failed before any scanning happened.
    #[error("Error reading file {name}: {source}")]
    ReadFailure {
        /// Display name of the file.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Subject or body is empty.
    #[error("Subject and body are required")]
    MissingContent,

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the user can be told about the error and retry
    /// with different input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyResult { .. }
                | Self::UnsupportedFormat(_)
                | Self::ReadFailure { .. }
                | Self::MissingContent
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
