//! # logsearch-core
//!
//! The archive path classifier for registry update logs - THE CLASSIFIER.
//!
//! Every update transaction the registry server processes is archived as a
//! handful of gzip files under `<date>/<txn>.update/`. This crate turns one
//! such path into a typed [`LogEntry`] that the search index can key on, or
//! into a typed [`LogEntryError`] explaining why it cannot be indexed.
//!
//! ## Components
//!
//! - `stream` → the closed set of archive modes and their allow-lists
//! - `types` → artifact kinds, entries, index keys, errors
//! - `parser` → the grammar-driven validator
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no logging, no global state
//! - Deterministic: the same input always yields the same result
//! - Thread-safe: every function may be called concurrently without locks
//!
//! ## Example
//!
//! ```
//! use logsearch_core::{ArtifactKind, LogEntryError, new_entry};
//!
//! let entry = new_entry("20130312/101010.update/001.msg-in.txt.gz", "20130312")?;
//! assert_eq!(entry.artifact_kind(), ArtifactKind::IncomingMessage);
//! assert_eq!(entry.update_id(), "20130312/101010.update/001.msg-in.txt.gz");
//!
//! let audit = new_entry("20130312/101010.update/000.audit.xml.gz", "20130312");
//! assert!(matches!(audit, Err(LogEntryError::UnsupportedArtifactKind { .. })));
//! # Ok::<(), LogEntryError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod parser;
pub mod primitives;
pub mod stream;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use parser::{LogEntryParser, new_entry, parse};
pub use stream::{LogStream, UnknownStreamError};
pub use types::{ArtifactKind, IndexKey, LogEntry, LogEntryError};
