//! # Logsearch - Update-Log Archive Classifier
//!
//! The main binary for classifying registry update-log archive paths.
//!
//! This application provides:
//! - CLI interface for classifying paths and path lists
//! - TOML scan configuration
//! - Structured logging of rejected paths
//!
//! ## Usage
//!
//! ```bash
//! # Classify individual paths
//! logsearch classify -d 20130312 20130312/101010.update/001.msg-in.txt.gz
//!
//! # Classify a candidate list, failing on the first bad path
//! logsearch scan -i paths.txt -d 20130312 --strict
//!
//! # Machine-readable output
//! logsearch --json-mode scan -i paths.txt -d 20130312
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr — LOGSEARCH_LOG_FORMAT=json enables
/// machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("LOGSEARCH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "logsearch=debug"
    } else {
        "logsearch=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
