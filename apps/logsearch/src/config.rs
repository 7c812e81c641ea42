//! # Scan Configuration
//!
//! Optional TOML file controlling how a scan treats the paths it reads.
//!
//! ```toml
//! stream = "daily"
//! on_invalid = "skip"          # or "fail"
//! max_input_bytes = 104857600
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use crate::error::Result;
use logsearch_core::LogStream;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on the candidate list size (100 MB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 100 * 1024 * 1024;

// =============================================================================
// INVALID PATH POLICY
// =============================================================================

/// What a scan does with a path that fails classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPathPolicy {
    /// Log the path, record it in the report, keep going.
    #[default]
    Skip,
    /// Abort the scan on the first invalid path.
    Fail,
}

// =============================================================================
// SCAN CONFIG
// =============================================================================

/// Settings for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Archive stream the paths are validated against.
    pub stream: LogStream,
    /// Handling of paths that fail classification.
    pub on_invalid: InvalidPathPolicy,
    /// Largest candidate list that will be read, in bytes.
    pub max_input_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            stream: LogStream::default(),
            on_invalid: InvalidPathPolicy::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ScanConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            stream = %config.stream,
            "Loaded scan configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides.
    ///
    /// `strict` forces the fail policy; it never relaxes a configured one.
    #[must_use]
    pub fn with_overrides(mut self, stream: Option<LogStream>, strict: bool) -> Self {
        if let Some(stream) = stream {
            self.stream = stream;
        }
        if strict {
            self.on_invalid = InvalidPathPolicy::Fail;
        }
        self
    }
}
