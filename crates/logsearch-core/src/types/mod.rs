//! # Core Type Definitions
//!
//! This module contains the typed vocabulary of the classifier:
//! - Artifact kinds (`ArtifactKind`)
//! - Validated log entries and their index keys (`LogEntry`, `IndexKey`)
//! - Error types (`LogEntryError`)
//!
//! ## Immutability Guarantees
//!
//! A `LogEntry` can only be produced by the parser. Its fields are private
//! and there is no mutation API, so every entry in circulation is one that
//! passed validation.

use crate::primitives::{
    TOKEN_ACKNOWLEDGEMENT, TOKEN_AUDIT_RECORD, TOKEN_INCOMING_MESSAGE, TOKEN_OUTBOUND_NOTIFICATION,
    UPDATE_FOLDER_SUFFIX,
};
use crate::stream::LogStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ARTIFACT KIND
// =============================================================================

/// The kind of file the registry server archives for one update transaction.
///
/// The set is closed. Token lookup and every consumer match on it
/// exhaustively, so a new kind is a compile error until each site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Update request as received from the submitter.
    #[serde(rename = "msg-in")]
    IncomingMessage,
    /// Response sent back to the submitter.
    #[serde(rename = "ack")]
    Acknowledgement,
    /// Internal audit trail of the update.
    #[serde(rename = "audit")]
    AuditRecord,
    /// Notification sent asynchronously to third parties.
    #[serde(rename = "msg-out")]
    OutboundNotification,
}

impl ArtifactKind {
    /// Every artifact kind, in declaration order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::IncomingMessage,
        ArtifactKind::Acknowledgement,
        ArtifactKind::AuditRecord,
        ArtifactKind::OutboundNotification,
    ];

    /// The filename token identifying this kind.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            ArtifactKind::IncomingMessage => TOKEN_INCOMING_MESSAGE,
            ArtifactKind::Acknowledgement => TOKEN_ACKNOWLEDGEMENT,
            ArtifactKind::AuditRecord => TOKEN_AUDIT_RECORD,
            ArtifactKind::OutboundNotification => TOKEN_OUTBOUND_NOTIFICATION,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::IncomingMessage => "incoming message",
            ArtifactKind::Acknowledgement => "acknowledgement",
            ArtifactKind::AuditRecord => "audit record",
            ArtifactKind::OutboundNotification => "outbound notification",
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = LogEntryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            TOKEN_INCOMING_MESSAGE => Ok(ArtifactKind::IncomingMessage),
            TOKEN_ACKNOWLEDGEMENT => Ok(ArtifactKind::Acknowledgement),
            TOKEN_AUDIT_RECORD => Ok(ArtifactKind::AuditRecord),
            TOKEN_OUTBOUND_NOTIFICATION => Ok(ArtifactKind::OutboundNotification),
            other => Err(LogEntryError::UnrecognizedArtifactToken(other.to_string())),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// INDEX KEY
// =============================================================================

/// Composite key identifying one artifact of one transaction.
///
/// Orders by date, then transaction, then sequence, then kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexKey<'a> {
    /// Date folder.
    pub date: &'a str,
    /// Transaction identifier, without the `.update` suffix.
    pub transaction_id: &'a str,
    /// Ordering token within the transaction.
    pub sequence: &'a str,
    /// Artifact kind.
    pub artifact_kind: ArtifactKind,
}

// =============================================================================
// LOG ENTRY
// =============================================================================

/// A validated archive path.
///
/// Created exactly once per successful parse. The `update_id` is the
/// normalized archive-relative path `<date>/<txn>.update/<filename>` and is
/// the canonical key downstream indexing uses.
///
/// Entries order by their index key first, so sorting a batch of entries
/// groups artifacts by day and transaction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LogEntry {
    date: String,
    transaction_id: String,
    sequence: String,
    artifact_kind: ArtifactKind,
    stream: LogStream,
    update_id: String,
}

impl LogEntry {
    /// Assemble an entry from already-validated parts.
    pub(crate) fn from_parts(
        date: &str,
        transaction_id: &str,
        sequence: &str,
        artifact_kind: ArtifactKind,
        stream: LogStream,
        update_id: String,
    ) -> Self {
        Self {
            date: date.to_string(),
            transaction_id: transaction_id.to_string(),
            sequence: sequence.to_string(),
            artifact_kind,
            stream,
            update_id,
        }
    }

    /// The date folder (equal to the caller's expected date).
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The transaction identifier, without the `.update` suffix.
    #[must_use]
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// The transaction folder as it appears on disk, e.g. `101010.update`.
    #[must_use]
    pub fn transaction_folder(&self) -> &str {
        let start = self.date.len() + 1;
        let end = start + self.transaction_id.len() + UPDATE_FOLDER_SUFFIX.len();
        &self.update_id[start..end]
    }

    /// The artifact filename, e.g. `001.msg-in.txt.gz`.
    #[must_use]
    pub fn filename(&self) -> &str {
        let start = self.date.len()
            + 1
            + self.transaction_id.len()
            + UPDATE_FOLDER_SUFFIX.len()
            + 1;
        &self.update_id[start..]
    }

    /// The ordering token within the transaction.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn artifact_kind(&self) -> ArtifactKind {
        self.artifact_kind
    }

    /// The archive stream this entry was validated against.
    #[must_use]
    pub fn stream(&self) -> LogStream {
        self.stream
    }

    /// The canonical key used by downstream indexing.
    #[must_use]
    pub fn update_id(&self) -> &str {
        &self.update_id
    }

    /// The composite index key of this entry.
    #[must_use]
    pub fn index_key(&self) -> IndexKey<'_> {
        IndexKey {
            date: &self.date,
            transaction_id: &self.transaction_id,
            sequence: &self.sequence,
            artifact_kind: self.artifact_kind,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.update_id)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Reasons an archive path is rejected.
///
/// - No partial entries: a failed parse returns only the error
/// - Deterministic: a path rejected once is rejected forever
/// - `UnsupportedArtifactKind` is the only non-grammar failure; see
///   [`LogEntryError::is_grammar_error`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogEntryError {
    /// The path is the empty string.
    #[error("empty path")]
    EmptyPath,

    /// The leading segment (date folder) is absent or empty.
    #[error("missing date folder: '{0}'")]
    MissingDateFolder(String),

    /// The transaction folder is absent, empty, or lacks the `.update` suffix.
    #[error("missing update folder: '{0}'")]
    MissingUpdateFolder(String),

    /// No filename follows the transaction folder.
    #[error("missing filename: '{0}'")]
    MissingFilename(String),

    /// The filename does not have the shape `<seq>.<token>.<ext...>.gz`.
    #[error("malformed filename: '{0}'")]
    MalformedFilename(String),

    /// The artifact token is not one of the known kinds.
    #[error("unrecognized artifact type: '{0}'")]
    UnrecognizedArtifactToken(String),

    /// The path's date folder differs from the caller's expected date.
    #[error("date folder mismatch: expected '{expected}', found '{found}'")]
    DateMismatch {
        /// Date the caller supplied.
        expected: String,
        /// Date folder found in the path.
        found: String,
    },

    /// The path is well formed but its kind belongs to another log stream.
    #[error("unsupported artifact kind for this stream: {kind} in {stream} stream")]
    UnsupportedArtifactKind {
        /// Kind parsed from the filename.
        kind: ArtifactKind,
        /// Stream the path was validated against.
        stream: LogStream,
    },
}

impl LogEntryError {
    /// `true` when the path itself is invalid, `false` when it is a valid
    /// path routed to the wrong stream.
    #[must_use]
    pub fn is_grammar_error(&self) -> bool {
        !matches!(self, LogEntryError::UnsupportedArtifactKind { .. })
    }

    /// Stable machine-readable identifier of the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LogEntryError::EmptyPath => "empty_path",
            LogEntryError::MissingDateFolder(_) => "missing_date_folder",
            LogEntryError::MissingUpdateFolder(_) => "missing_update_folder",
            LogEntryError::MissingFilename(_) => "missing_filename",
            LogEntryError::MalformedFilename(_) => "malformed_filename",
            LogEntryError::UnrecognizedArtifactToken(_) => "unrecognized_artifact_token",
            LogEntryError::DateMismatch { .. } => "date_mismatch",
            LogEntryError::UnsupportedArtifactKind { .. } => "unsupported_artifact_kind",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> LogEntry {
        LogEntry::from_parts(
            "20130312",
            "101010",
            "001",
            ArtifactKind::IncomingMessage,
            LogStream::Daily,
            "20130312/101010.update/001.msg-in.txt.gz".to_string(),
        )
    }

    #[test]
    fn token_lookup_is_inverse_of_token() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.token().parse::<ArtifactKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let result = "msg".parse::<ArtifactKind>();
        assert_eq!(
            result,
            Err(LogEntryError::UnrecognizedArtifactToken("msg".to_string()))
        );
    }

    #[test]
    fn token_lookup_is_case_sensitive() {
        assert!("ACK".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn artifact_kind_serializes_as_token() {
        let json = serde_json::to_string(&ArtifactKind::OutboundNotification).expect("serialize");
        assert_eq!(json, "\"msg-out\"");

        let kind: ArtifactKind = serde_json::from_str("\"ack\"").expect("deserialize");
        assert_eq!(kind, ArtifactKind::Acknowledgement);
    }

    #[test]
    fn entry_slices_folder_and_filename() {
        let entry = sample_entry();
        assert_eq!(entry.transaction_folder(), "101010.update");
        assert_eq!(entry.filename(), "001.msg-in.txt.gz");
        assert_eq!(entry.to_string(), entry.update_id());
    }

    #[test]
    fn index_key_orders_by_sequence_within_transaction() {
        let first = sample_entry();
        let second = LogEntry::from_parts(
            "20130312",
            "101010",
            "002",
            ArtifactKind::Acknowledgement,
            LogStream::Daily,
            "20130312/101010.update/002.ack.txt.gz".to_string(),
        );
        assert!(first.index_key() < second.index_key());
        assert!(first < second);
    }

    #[test]
    fn only_unsupported_kind_is_not_a_grammar_error() {
        let unsupported = LogEntryError::UnsupportedArtifactKind {
            kind: ArtifactKind::AuditRecord,
            stream: LogStream::Daily,
        };
        assert!(!unsupported.is_grammar_error());
        assert!(LogEntryError::EmptyPath.is_grammar_error());
        assert!(LogEntryError::MalformedFilename("x".to_string()).is_grammar_error());
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(LogEntryError::EmptyPath.to_string(), "empty path");
        assert!(
            LogEntryError::MissingFilename("a/b.update".to_string())
                .to_string()
                .starts_with("missing filename")
        );
        let unsupported = LogEntryError::UnsupportedArtifactKind {
            kind: ArtifactKind::OutboundNotification,
            stream: LogStream::Daily,
        };
        assert!(
            unsupported
                .to_string()
                .starts_with("unsupported artifact kind for this stream")
        );
    }
}
