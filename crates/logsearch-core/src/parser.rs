//! # Parser Module
//!
//! Archive path validation for the update-log search index.
//!
//! - Validate path structure before anything reaches the index
//! - Reject malformed paths with a typed cause
//! - Reject well-formed paths whose artifact kind the stream does not index
//! - No I/O, no shared state: safe to call from any number of threads
//!
//! ## Grammar
//!
//! ```text
//! [prefix/]<date>/<txn>.update/<sequence>.<token>.<extension...>.gz
//! ```
//!
//! Checks run in a fixed order and the first failure wins: date folder,
//! update folder, filename, filename shape, artifact token, date consistency,
//! stream allow-list. Grammar failures are therefore always reported before
//! the stream policy is consulted.

use crate::primitives::{
    ARCHIVE_SEGMENTS, COMPRESSED_SUFFIX, FILENAME_SEPARATOR, PATH_SEPARATOR, UPDATE_FOLDER_SUFFIX,
};
use crate::{ArtifactKind, LogEntry, LogEntryError, LogStream};

/// The LogEntryParser turns archive paths into validated entries.
///
/// The LogEntryParser:
/// - Accepts raw paths from the archive scanner
/// - Validates them against the archive grammar
/// - Checks the artifact kind against the stream's allow-list
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEntryParser;

/// The three archive-relative segments of a path, not yet checked.
struct Segments<'a> {
    date: Option<&'a str>,
    update_folder: Option<&'a str>,
    filename: Option<&'a str>,
}

impl LogEntryParser {
    /// Parse a path discovered under `expected_date` for the given stream.
    ///
    /// Leading segments beyond the last three are a location prefix and are
    /// dropped; the returned entry's `update_id` is the archive-relative path.
    ///
    /// # Errors
    /// Returns the first [`LogEntryError`] the path violates. No partial
    /// entry is ever produced.
    pub fn parse(
        path: &str,
        expected_date: &str,
        stream: LogStream,
    ) -> Result<LogEntry, LogEntryError> {
        if path.is_empty() {
            return Err(LogEntryError::EmptyPath);
        }

        let segments = Self::split_segments(path);

        let date = segments
            .date
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LogEntryError::MissingDateFolder(path.to_string()))?;

        let update_folder = segments
            .update_folder
            .ok_or_else(|| LogEntryError::MissingUpdateFolder(path.to_string()))?;
        let transaction_id = update_folder
            .strip_suffix(UPDATE_FOLDER_SUFFIX)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| LogEntryError::MissingUpdateFolder(path.to_string()))?;

        let filename = segments
            .filename
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LogEntryError::MissingFilename(path.to_string()))?;

        let (sequence, token) = Self::split_filename(filename)?;
        let kind: ArtifactKind = token.parse()?;

        if date != expected_date {
            return Err(LogEntryError::DateMismatch {
                expected: expected_date.to_string(),
                found: date.to_string(),
            });
        }

        if !stream.accepts(kind) {
            return Err(LogEntryError::UnsupportedArtifactKind { kind, stream });
        }

        let update_id = format!(
            "{date}{PATH_SEPARATOR}{update_folder}{PATH_SEPARATOR}{filename}"
        );

        Ok(LogEntry::from_parts(
            date,
            transaction_id,
            sequence,
            kind,
            stream,
            update_id,
        ))
    }

    /// Build an entry for the daily stream.
    ///
    /// Only `msg-in` and `ack` artifacts are accepted; `audit` and `msg-out`
    /// paths fail with `UnsupportedArtifactKind` even though they are
    /// structurally valid.
    pub fn new_entry(path: &str, expected_date: &str) -> Result<LogEntry, LogEntryError> {
        Self::parse(path, expected_date, LogStream::Daily)
    }

    /// Split a path into its archive-relative segments.
    ///
    /// Paths with more than three segments keep only the trailing three.
    /// Shorter paths are read left to right, so the missing parts are the
    /// trailing ones.
    fn split_segments(path: &str) -> Segments<'_> {
        let parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let archive = &parts[parts.len().saturating_sub(ARCHIVE_SEGMENTS)..];
        let mut iter = archive.iter().copied();

        Segments {
            date: iter.next(),
            update_folder: iter.next(),
            filename: iter.next(),
        }
    }

    /// Split `<sequence>.<token>.<extension...>.gz` into sequence and token.
    fn split_filename(filename: &str) -> Result<(&str, &str), LogEntryError> {
        let malformed = || LogEntryError::MalformedFilename(filename.to_string());

        let stem = filename
            .strip_suffix(COMPRESSED_SUFFIX)
            .ok_or_else(malformed)?;
        let mut parts = stem.split(FILENAME_SEPARATOR);

        let sequence = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;
        let token = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;

        // At least one extension part before `.gz`, none of them empty
        let mut extensions = parts.peekable();
        if extensions.peek().is_none() || extensions.any(str::is_empty) {
            return Err(malformed());
        }

        Ok((sequence, token))
    }
}

/// Parse a path for the given stream. See [`LogEntryParser::parse`].
pub fn parse(path: &str, expected_date: &str, stream: LogStream) -> Result<LogEntry, LogEntryError> {
    LogEntryParser::parse(path, expected_date, stream)
}

/// Build a daily-stream entry. See [`LogEntryParser::new_entry`].
pub fn new_entry(path: &str, expected_date: &str) -> Result<LogEntry, LogEntryError> {
    LogEntryParser::new_entry(path, expected_date)
}

impl TryFrom<(&str, &str)> for LogEntry {
    type Error = LogEntryError;

    /// `(path, expected_date)` for the daily stream.
    fn try_from((path, expected_date): (&str, &str)) -> Result<Self, Self::Error> {
        LogEntryParser::new_entry(path, expected_date)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "20130312";

    fn parse_err(path: &str, date: &str) -> LogEntryError {
        match LogEntryParser::parse(path, date, LogStream::Daily) {
            Ok(entry) => unreachable!("unexpected entry {entry}"),
            Err(e) => e,
        }
    }

    #[test]
    fn empty_path_rejected() {
        assert_eq!(parse_err("", ""), LogEntryError::EmptyPath);
    }

    #[test]
    fn bare_slash_is_missing_date_folder() {
        assert!(matches!(
            parse_err("/", ""),
            LogEntryError::MissingDateFolder(_)
        ));
    }

    #[test]
    fn leading_slash_without_date_is_missing_date_folder() {
        assert!(matches!(
            parse_err("/101010.update", ""),
            LogEntryError::MissingDateFolder(_)
        ));
    }

    #[test]
    fn date_only_is_missing_update_folder() {
        assert!(matches!(
            parse_err("20130312/", ""),
            LogEntryError::MissingUpdateFolder(_)
        ));
        assert!(matches!(
            parse_err("20130312", ""),
            LogEntryError::MissingUpdateFolder(_)
        ));
    }

    #[test]
    fn folder_without_suffix_is_missing_update_folder() {
        assert!(matches!(
            parse_err("20130312/101010/001.msg-in.txt.gz", DATE),
            LogEntryError::MissingUpdateFolder(_)
        ));
        assert!(matches!(
            parse_err("20130312/.update/001.msg-in.txt.gz", DATE),
            LogEntryError::MissingUpdateFolder(_)
        ));
    }

    #[test]
    fn no_filename_is_missing_filename() {
        assert!(matches!(
            parse_err("20130312/101010.update", ""),
            LogEntryError::MissingFilename(_)
        ));
    }

    #[test]
    fn trailing_slash_is_missing_filename() {
        assert!(matches!(
            parse_err("20130312/101010.update/", DATE),
            LogEntryError::MissingFilename(_)
        ));
    }

    #[test]
    fn bare_filename_is_malformed() {
        assert_eq!(
            parse_err("20130312/101010.update/filename", ""),
            LogEntryError::MalformedFilename("filename".to_string())
        );
    }

    #[test]
    fn filename_shapes_rejected() {
        for filename in [
            "001.msg-in.txt",
            "001.msg-in.gz",
            ".msg-in.txt.gz",
            "001..txt.gz",
            "001.msg-in..gz",
            "001.msg-in.txt.gz.bak",
        ] {
            let path = format!("{DATE}/101010.update/{filename}");
            assert!(
                matches!(parse_err(&path, DATE), LogEntryError::MalformedFilename(_)),
                "{path} should be malformed"
            );
        }
    }

    #[test]
    fn unknown_token_rejected() {
        assert_eq!(
            parse_err("20130312/101010.update/001.msg.txt.gz", DATE),
            LogEntryError::UnrecognizedArtifactToken("msg".to_string())
        );
    }

    #[test]
    fn date_mismatch_rejected() {
        assert_eq!(
            parse_err("20130312/101010.update/001.msg-in.txt.gz", "20130313"),
            LogEntryError::DateMismatch {
                expected: "20130313".to_string(),
                found: DATE.to_string(),
            }
        );
    }

    #[test]
    fn grammar_checked_before_date() {
        assert!(matches!(
            parse_err("20130312/101010.update/001.bogus.txt.gz", "19990101"),
            LogEntryError::UnrecognizedArtifactToken(_)
        ));
    }

    #[test]
    fn stray_slash_in_filename_rejected() {
        let err = parse_err("20130312/101010.update/001/msg-in.txt.gz", DATE);
        assert!(err.is_grammar_error());
    }

    #[test]
    fn incoming_message_accepted() {
        let path = "20130312/101010.update/001.msg-in.txt.gz";
        let entry = LogEntryParser::new_entry(path, DATE).expect("valid entry");

        assert_eq!(entry.update_id(), path);
        assert_eq!(entry.date(), DATE);
        assert_eq!(entry.transaction_id(), "101010");
        assert_eq!(entry.transaction_folder(), "101010.update");
        assert_eq!(entry.sequence(), "001");
        assert_eq!(entry.filename(), "001.msg-in.txt.gz");
        assert_eq!(entry.artifact_kind(), ArtifactKind::IncomingMessage);
        assert_eq!(entry.stream(), LogStream::Daily);
    }

    #[test]
    fn acknowledgement_accepted() {
        let entry = new_entry("20130312/101010.update/002.ack.txt.gz", DATE).expect("valid entry");
        assert_eq!(entry.artifact_kind(), ArtifactKind::Acknowledgement);
        assert_eq!(entry.sequence(), "002");
    }

    #[test]
    fn multi_part_extension_accepted() {
        let entry =
            new_entry("20130312/101010.update/003.msg-in.mail.txt.gz", DATE).expect("valid entry");
        assert_eq!(entry.filename(), "003.msg-in.mail.txt.gz");
    }

    #[test]
    fn audit_under_prefix_is_unsupported() {
        let err = new_entry(
            "/some/ignored/path/prefix/20130312/101010.update/000.audit.xml.gz",
            DATE,
        )
        .err();
        assert_eq!(
            err,
            Some(LogEntryError::UnsupportedArtifactKind {
                kind: ArtifactKind::AuditRecord,
                stream: LogStream::Daily,
            })
        );
    }

    #[test]
    fn outbound_notification_is_unsupported() {
        let err = new_entry("20130312/101010.update/666.msg-out.txt.gz", DATE).err();
        assert_eq!(
            err,
            Some(LogEntryError::UnsupportedArtifactKind {
                kind: ArtifactKind::OutboundNotification,
                stream: LogStream::Daily,
            })
        );
    }

    #[test]
    fn prefix_is_stripped_from_update_id() {
        let entry = new_entry("/var/log/updates/20130312/101010.update/001.msg-in.txt.gz", DATE)
            .expect("valid entry");
        assert_eq!(entry.update_id(), "20130312/101010.update/001.msg-in.txt.gz");
    }

    #[test]
    fn try_from_matches_new_entry() {
        let path = "20130312/101010.update/002.ack.txt.gz";
        let via_try_from = LogEntry::try_from((path, DATE)).expect("valid entry");
        let via_new = new_entry(path, DATE).expect("valid entry");
        assert_eq!(via_try_from, via_new);
    }
}
