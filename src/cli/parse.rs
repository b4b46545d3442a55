//! CLI parse: clap types for fimon. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fimon - file integrity monitoring
#[derive(Parser)]
#[command(name = "fimon")]
#[command(about = "File integrity monitoring with cryptographic baselines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Baseline file path (overrides config and the default data directory)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build or replace the baseline for a directory tree
    Init {
        /// Directory to record
        root: PathBuf,
    },
    /// Check a directory tree against the stored baseline
    Check {
        /// Directory to check
        root: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show whether a baseline exists and what it covers
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
