//! # Archive Streams
//!
//! The closed set of archive modes the classifier understands, and the
//! artifact kinds each one indexes.
//!
//! | Stream | Indexed kinds | Routed elsewhere |
//! |--------|---------------|------------------|
//! | `daily` | `msg-in`, `ack` | `audit`, `msg-out` |
//!
//! A new archive mode is added as a new variant. The allow-list of an
//! existing variant never changes when that happens.

use crate::types::ArtifactKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// STREAM ENUM
// =============================================================================

/// An archive mode, selecting which artifact kinds are indexable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogStream {
    /// Daily incremental stream: one folder per calendar date.
    #[default]
    Daily,
}

impl LogStream {
    /// Every known stream.
    pub const ALL: [LogStream; 1] = [LogStream::Daily];

    /// Get the stream name as used in configuration.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LogStream::Daily => "daily",
        }
    }

    /// Check whether this stream indexes the given kind.
    #[must_use]
    pub fn accepts(&self, kind: ArtifactKind) -> bool {
        match (self, kind) {
            (LogStream::Daily, ArtifactKind::IncomingMessage | ArtifactKind::Acknowledgement) => {
                true
            }
            (LogStream::Daily, ArtifactKind::AuditRecord | ArtifactKind::OutboundNotification) => {
                false
            }
        }
    }

    /// Iterate over the kinds this stream indexes.
    pub fn accepted_kinds(&self) -> impl Iterator<Item = ArtifactKind> + use<> {
        let stream = *self;
        ArtifactKind::ALL
            .into_iter()
            .filter(move |kind| stream.accepts(*kind))
    }
}

impl fmt::Display for LogStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a stream name does not match any known stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log stream: '{0}'")]
pub struct UnknownStreamError(pub String);

impl FromStr for LogStream {
    type Err = UnknownStreamError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LogStream::ALL
            .into_iter()
            .find(|stream| stream.name() == name)
            .ok_or_else(|| UnknownStreamError(name.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
