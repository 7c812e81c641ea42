//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use logsearch::{CliError, ScanConfig, ScanReport, candidate_paths, read_candidates, scan_paths};
use logsearch_core::{ArtifactKind, LogStream};
use std::path::Path;

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Classify paths given on the command line.
pub fn cmd_classify(
    config: &ScanConfig,
    json_mode: bool,
    date: &str,
    paths: &[String],
) -> Result<(), CliError> {
    let report = scan_paths(paths.iter().map(String::as_str), date, config)?;
    print_report(&report, json_mode)
}

// =============================================================================
// SCAN COMMAND
// =============================================================================

/// Classify every path listed in `input`.
pub fn cmd_scan(
    config: &ScanConfig,
    json_mode: bool,
    input: &Path,
    date: &str,
) -> Result<(), CliError> {
    tracing::info!("Scanning candidates from {:?} (stream: {})", input, config.stream);

    let contents = read_candidates(input, config.max_input_bytes)?;
    let report = scan_paths(candidate_paths(&contents), date, config)?;
    print_report(&report, json_mode)
}

// =============================================================================
// STREAMS COMMAND
// =============================================================================

/// List archive streams and the kinds each one indexes.
pub fn cmd_streams(json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        let streams: Vec<_> = LogStream::ALL
            .iter()
            .map(|stream| {
                let accepted: Vec<ArtifactKind> = stream.accepted_kinds().collect();
                serde_json::json!({
                    "stream": stream,
                    "accepted": accepted,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&streams)?);
        return Ok(());
    }

    println!("Archive Streams");
    println!("===============");
    for stream in LogStream::ALL {
        let accepted: Vec<&str> = stream.accepted_kinds().map(|k| k.token()).collect();
        println!("{:<8} {}", stream.name(), accepted.join(", "));
    }

    Ok(())
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_report(report: &ScanReport, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for entry in &report.accepted {
        println!("OK  {:<8} {}", entry.artifact_kind().token(), entry.update_id());
    }
    for rejection in &report.rejected {
        println!("ERR {}: {}", rejection.path, rejection.reason);
    }

    println!();
    println!("Stream:   {}", report.stream);
    println!("Date:     {}", report.date);
    println!("Accepted: {}", report.accepted.len());
    println!(
        "Rejected: {} ({} routed to other streams)",
        report.rejected.len(),
        report.routed_elsewhere()
    );

    Ok(())
}
