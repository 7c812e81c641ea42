//! # Application Errors
//!
//! Everything the scan driver can fail with. Classification failures keep
//! their typed [`LogEntryError`] so callers can still tell a malformed path
//! from one routed to another stream.

use logsearch_core::LogEntryError;
use thiserror::Error;

/// Result type alias for the scan driver.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised by the `logsearch` binary and its library half.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the configuration or the candidate list failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Writing the JSON report failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The candidate list is larger than the configured cap.
    #[error("Input size {size} bytes exceeds maximum allowed {max} bytes")]
    InputTooLarge {
        /// Size of the file on disk.
        size: u64,
        /// Configured `max_input_bytes`.
        max: u64,
    },

    /// An archive path failed classification under the fail policy.
    #[error("Invalid archive path '{path}': {source}")]
    InvalidPath {
        /// The offending path, as read.
        path: String,
        /// Why it was rejected.
        #[source]
        source: LogEntryError,
    },
}

impl CliError {
    /// The classification error behind this failure, if any.
    #[must_use]
    pub fn entry_error(&self) -> Option<&LogEntryError> {
        match self {
            CliError::InvalidPath { source, .. } => Some(source),
            _ => None,
        }
    }
}
