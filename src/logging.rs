//! Logging System
//!
//! Structured logging via the `tracing` crate: configurable level, format
//! (text or JSON), and destination, with `FIMON_LOG*` environment variables
//! taking precedence over file configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text).
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file.
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (when output is "file").
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format, terminal destinations only).
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    // Placeholder; the binary resolves this to the XDG data directory.
    PathBuf::from(".fimon/fimon.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest): environment variables (`FIMON_LOG`,
/// `FIMON_LOG_FORMAT`, `FIMON_LOG_OUTPUT`, `FIMON_LOG_MODULES`), then the
/// provided configuration, then defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfigError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base = Registry::default().with(filter);

    match (format.as_str(), output.as_str()) {
        ("json", "file") => {
            let writer = open_log_file(config)?;
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .init();
        }
        ("json", "stdout") => {
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .init();
        }
        ("json", _) => {
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
        }
        (_, "file") => {
            let writer = open_log_file(config)?;
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
        }
        (_, "stdout") => {
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .init();
        }
        _ => {
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
        }
    }

    Ok(())
}

fn open_log_file(config: Option<&LoggingConfig>) -> Result<std::fs::File, ConfigError> {
    let log_file = config
        .map(|c| c.file.clone())
        .unwrap_or_else(default_log_file);

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Invalid(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| ConfigError::Invalid(format!("Failed to open log file {:?}: {}", log_file, e)))
}

/// Build the level filter from `FIMON_LOG`, config, and `FIMON_LOG_MODULES`.
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env("FIMON_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(directive.parse().map_err(|e| {
                ConfigError::Invalid(format!("Invalid log directive: {}", e))
            })?);
        }
    }

    if let Ok(modules_str) = std::env::var("FIMON_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ConfigError::Invalid(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ConfigError> {
    if let Ok(format) = std::env::var("FIMON_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ConfigError::Invalid(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<String, ConfigError> {
    let output = std::env::var("FIMON_LOG_OUTPUT")
        .ok()
        .unwrap_or_else(|| {
            config
                .map(|c| c.output.clone())
                .unwrap_or_else(default_output)
        });

    match output.as_str() {
        "stdout" | "stderr" | "file" => Ok(output),
        _ => Err(ConfigError::Invalid(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
