//! # Archive Grammar Primitives
//!
//! Fixed constants describing the on-disk layout of the update-log archive.
//!
//! Every accepted or rejected update is archived as:
//!
//! ```text
//! <date folder>/<transaction id>.update/<sequence>.<artifact token>.<extension...>.gz
//! ```
//!
//! These values are compiled in and never configurable at runtime.

/// Separator between archive path segments.
pub const PATH_SEPARATOR: char = '/';

/// Separator between the dotted parts of an artifact filename.
pub const FILENAME_SEPARATOR: char = '.';

/// Literal suffix carried by every transaction folder.
pub const UPDATE_FOLDER_SUFFIX: &str = ".update";

/// Literal suffix carried by every archived artifact (gzip compressed).
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Number of trailing segments that make up an archive-relative path:
/// date folder, transaction folder, filename.
///
/// Anything in front of these is a location prefix and is ignored.
pub const ARCHIVE_SEGMENTS: usize = 3;

// =============================================================================
// ARTIFACT TOKENS
// =============================================================================

/// Filename token for a received update request.
pub const TOKEN_INCOMING_MESSAGE: &str = "msg-in";

/// Filename token for the acknowledgement sent back to the submitter.
pub const TOKEN_ACKNOWLEDGEMENT: &str = "ack";

/// Filename token for the internal audit trail.
pub const TOKEN_AUDIT_RECORD: &str = "audit";

/// Filename token for notifications mailed to third parties.
pub const TOKEN_OUTBOUND_NOTIFICATION: &str = "msg-out";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_path_has_three_segments() {
        assert_eq!(ARCHIVE_SEGMENTS, 3);
    }

    #[test]
    fn tokens_are_distinct() {
        let tokens = [
            TOKEN_INCOMING_MESSAGE,
            TOKEN_ACKNOWLEDGEMENT,
            TOKEN_AUDIT_RECORD,
            TOKEN_OUTBOUND_NOTIFICATION,
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in tokens.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn tokens_never_contain_separators() {
        for token in [
            TOKEN_INCOMING_MESSAGE,
            TOKEN_ACKNOWLEDGEMENT,
            TOKEN_AUDIT_RECORD,
            TOKEN_OUTBOUND_NOTIFICATION,
        ] {
            assert!(!token.contains(PATH_SEPARATOR));
            assert!(!token.contains(FILENAME_SEPARATOR));
        }
    }
}
