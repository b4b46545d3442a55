//! CLI route: single route table and run context. Dispatches to the engine
//! and presentation.

use crate::baseline::BaselineStore;
use crate::cli::output::format_init_summary;
use crate::cli::parse::Commands;
use crate::config::{default_baseline_path, ConfigLoader, FimonConfig};
use crate::engine::IntegrityEngine;
use crate::error::CliError;
use crate::report::{
    format_report_json, format_report_text, format_status_json, format_status_text,
    BaselineStatus,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime context for CLI execution: resolved baseline location and scan
/// settings, built from CLI flags and ConfigLoader only.
pub struct RunContext {
    config: FimonConfig,
    baseline_path: PathBuf,
}

impl RunContext {
    /// Create a run context from the baseline override and optional config
    /// path. Precedence for the baseline location: CLI flag, config file,
    /// XDG data directory default.
    pub fn new(
        baseline_override: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        let baseline_path = baseline_override
            .or_else(|| config.baseline.clone())
            .unwrap_or_else(default_baseline_path);
        Ok(Self {
            config,
            baseline_path,
        })
    }

    /// Location the baseline will be read from / written to.
    pub fn baseline_path(&self) -> &Path {
        &self.baseline_path
    }

    /// Execute a parsed command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, CliError> {
        match command {
            Commands::Init { root } => {
                let root = self.validated_root(root)?;
                let outcome = self.engine().build_baseline(&root)?;
                Ok(format_init_summary(&outcome))
            }
            Commands::Check { root, format } => {
                let format = parse_format(format)?;
                let root = self.validated_root(root)?;
                let report = self.engine().check_integrity(&root)?;
                match format {
                    OutputFormat::Text => Ok(format_report_text(&report)),
                    OutputFormat::Json => Ok(format_report_json(&report)?),
                }
            }
            Commands::Status { format } => {
                let format = parse_format(format)?;
                let status = self.baseline_status()?;
                match format {
                    OutputFormat::Text => Ok(format_status_text(&status)),
                    OutputFormat::Json => Ok(format_status_json(&status)?),
                }
            }
        }
    }

    fn engine(&self) -> IntegrityEngine {
        IntegrityEngine::with_scan_config(
            BaselineStore::new(&self.baseline_path),
            self.config.scan.clone(),
        )
    }

    /// Validate the root argument before the engine runs: it must resolve
    /// to an existing directory. The engine assumes this has been done.
    fn validated_root(&self, root: &Path) -> Result<PathBuf, CliError> {
        let canonical = dunce::canonicalize(root)
            .map_err(|_| CliError::InvalidRoot(root.display().to_string()))?;
        if !canonical.is_dir() {
            return Err(CliError::InvalidRoot(root.display().to_string()));
        }
        Ok(canonical)
    }

    fn baseline_status(&self) -> Result<BaselineStatus, CliError> {
        let store = BaselineStore::new(&self.baseline_path);
        let snapshot = store.load()?;
        let size_bytes = fs::metadata(&self.baseline_path).ok().map(|m| m.len());
        Ok(BaselineStatus {
            baseline_path: self.baseline_path.display().to_string(),
            exists: snapshot.is_some(),
            entries: snapshot.map(|s| s.len() as u64),
            size_bytes,
        })
    }
}

enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, CliError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(CliError::InvalidFormat(other.to_string())),
    }
}
