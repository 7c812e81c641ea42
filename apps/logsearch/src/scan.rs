//! # Archive Scan
//!
//! Runs a list of candidate paths through the classifier and collects the
//! outcome. The caller owns the invalid-path policy; the classifier itself
//! never retries and never coerces.

use crate::config::{InvalidPathPolicy, ScanConfig};
use crate::error::{CliError, Result};
use logsearch_core::{LogEntry, LogEntryError, LogStream, parse};
use serde::Serialize;
use std::path::Path;

// =============================================================================
// REPORT TYPES
// =============================================================================

/// A candidate path the classifier refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// The path as read.
    pub path: String,
    /// Machine-readable error kind, e.g. `malformed_filename`.
    pub code: &'static str,
    /// Human-readable cause.
    pub reason: String,
    /// `false` when the path is valid but belongs to another stream.
    pub grammar: bool,
}

impl Rejection {
    fn new(path: &str, error: &LogEntryError) -> Self {
        Self {
            path: path.to_string(),
            code: error.code(),
            reason: error.to_string(),
            grammar: error.is_grammar_error(),
        }
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub stream: LogStream,
    pub date: String,
    /// Accepted entries, sorted by index key, one per update id.
    pub accepted: Vec<LogEntry>,
    /// Rejected paths in input order.
    pub rejected: Vec<Rejection>,
}

impl ScanReport {
    /// `true` if every candidate was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Number of rejections caused by paths routed to another stream.
    #[must_use]
    pub fn routed_elsewhere(&self) -> usize {
        self.rejected.iter().filter(|r| !r.grammar).count()
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// Read a newline-separated candidate list, refusing files over `max_bytes`.
pub fn read_candidates(path: &Path, max_bytes: u64) -> Result<String> {
    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(CliError::InputTooLarge {
            size,
            max: max_bytes,
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Iterate the candidate paths in a list: trimmed, skipping blank lines
/// and `#` comments.
pub fn candidate_paths(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

// =============================================================================
// SCAN
// =============================================================================

/// Classify every path found under `date`.
///
/// # Errors
/// Under [`InvalidPathPolicy::Fail`] the first invalid path aborts the scan
/// with [`CliError::InvalidPath`].
pub fn scan_paths<'a, I>(paths: I, date: &str, config: &ScanConfig) -> Result<ScanReport>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for path in paths {
        match parse(path, date, config.stream) {
            Ok(entry) => {
                tracing::debug!(path, kind = %entry.artifact_kind(), "Accepted archive path");
                accepted.push(entry);
            }
            Err(error) => match config.on_invalid {
                InvalidPathPolicy::Skip => {
                    tracing::warn!(path, reason = %error, "Skipping archive path");
                    rejected.push(Rejection::new(path, &error));
                }
                InvalidPathPolicy::Fail => {
                    tracing::error!(path, reason = %error, "Invalid archive path");
                    return Err(CliError::InvalidPath {
                        path: path.to_string(),
                        source: error,
                    });
                }
            },
        }
    }

    // Entries with the same update id are equal in every field
    accepted.sort();
    accepted.dedup();

    tracing::info!(
        stream = %config.stream,
        date,
        accepted = accepted.len(),
        rejected = rejected.len(),
        "Scan complete"
    );

    Ok(ScanReport {
        stream: config.stream,
        date: date.to_string(),
        accepted,
        rejected,
    })
}
