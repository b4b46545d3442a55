//! Configuration System
//!
//! Layered configuration: an optional TOML file (explicit path, else
//! `fimon.toml` in the working directory, else the XDG config directory)
//! with `FIMON_*` environment variable overrides on top.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FimonConfig {
    /// Baseline file location (defaults to the XDG data directory).
    pub baseline: Option<PathBuf>,

    /// Tree-scanning settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings that shape the filesystem walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Whether to follow symbolic links (default: false).
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum depth to traverse (None = unlimited).
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Loads configuration from files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, optionally from an explicit file path.
    ///
    /// With an explicit path the file must exist; otherwise the default
    /// locations are all optional and absent files simply contribute
    /// nothing.
    pub fn load(explicit: Option<&Path>) -> Result<FimonConfig, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()));
        } else {
            if let Some(dir) = xdg_config_dir() {
                builder =
                    builder.add_source(File::from(dir.join("config.toml")).required(false));
            }
            builder = builder.add_source(File::from(PathBuf::from("fimon.toml")).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("FIMON").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<FimonConfig, ConfigError> {
        Self::load(Some(path))
    }
}

/// Default baseline location: `$XDG_DATA_HOME/fimon/baseline.json`, falling
/// back to a `.fimon` directory when no home is available.
pub fn default_baseline_path() -> PathBuf {
    ProjectDirs::from("", "", "fimon")
        .map(|dirs| dirs.data_dir().join("baseline.json"))
        .unwrap_or_else(|| PathBuf::from(".fimon/baseline.json"))
}

/// Default log file location, next to the baseline.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "fimon")
        .map(|dirs| dirs.data_dir().join("fimon.log"))
        .unwrap_or_else(|| PathBuf::from(".fimon/fimon.log"))
}

fn xdg_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fimon").map(|dirs| dirs.config_dir().to_path_buf())
}
