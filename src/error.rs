//! Error types for the fimon integrity-monitoring system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a directory tree.
///
/// `RootUnreadable` aborts the whole operation; a per-file `Io` is recovered
/// by the engine, which records the file as unreadable and continues.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to traverse root {path:?}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the baseline store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Baseline I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed baseline at {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the integrity engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No baseline found at {0:?}. Run `fimon init <root>` to create one.")]
    BaselineMissing(PathBuf),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configuration and logging-setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors at the CLI boundary.
///
/// The CLI validates the root argument before the engine runs; the engine
/// assumes a pre-validated root (see `cli::route`).
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid folder path: {0}")]
    InvalidRoot(String),

    #[error("Invalid output format: {0} (must be 'text' or 'json')")]
    InvalidFormat(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
