//! # logsearch
//!
//! Library half of the `logsearch` binary: scan configuration, the
//! invalid-path policy, and scan reports. Exposed so the driver can be
//! tested without spawning the binary.

pub mod config;
pub mod error;
pub mod scan;

pub use config::{InvalidPathPolicy, ScanConfig};
pub use error::CliError;
pub use scan::{Rejection, ScanReport, candidate_paths, read_candidates, scan_paths};
