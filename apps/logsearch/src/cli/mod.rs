//! # Logsearch CLI Module
//!
//! This module implements the CLI interface for logsearch.
//!
//! ## Available Commands
//!
//! - `classify` - Classify archive paths given on the command line
//! - `scan` - Classify every path listed in a file
//! - `streams` - List archive streams and the kinds they index

mod commands;

use clap::{Parser, Subcommand};
use logsearch::{CliError, ScanConfig};
use logsearch_core::LogStream;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Logsearch - update-log archive classifier
///
/// Turns archive paths into index entries, or explains why they cannot be
/// indexed.
#[derive(Parser, Debug)]
#[command(name = "logsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML scan configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify archive paths given as arguments
    Classify {
        /// Date folder the paths were found under
        #[arg(short, long)]
        date: String,

        /// Archive stream (overrides the config file)
        #[arg(short, long)]
        stream: Option<LogStream>,

        /// Fail on the first invalid path
        #[arg(long)]
        strict: bool,

        /// Archive paths to classify
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Classify every path listed in a file, one per line
    Scan {
        /// File listing candidate paths
        #[arg(short, long)]
        input: PathBuf,

        /// Date folder the paths were found under
        #[arg(short, long)]
        date: String,

        /// Archive stream (overrides the config file)
        #[arg(short, long)]
        stream: Option<LogStream>,

        /// Fail on the first invalid path
        #[arg(long)]
        strict: bool,
    },

    /// List archive streams and the artifact kinds they index
    Streams,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;
    let base = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };

    match cli.command {
        Commands::Classify {
            date,
            stream,
            strict,
            paths,
        } => {
            let config = base.with_overrides(stream, strict);
            cmd_classify(&config, json_mode, &date, &paths)
        }
        Commands::Scan {
            input,
            date,
            stream,
            strict,
        } => {
            let config = base.with_overrides(stream, strict);
            cmd_scan(&config, json_mode, &input, &date)
        }
        Commands::Streams => cmd_streams(json_mode),
    }
}
