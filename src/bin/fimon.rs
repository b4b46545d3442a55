//! fimon CLI binary
//!
//! Command-line interface for the fimon file-integrity monitor.

use clap::Parser;
use fimon::cli::{render_error, wants_json, Cli, RunContext};
use fimon::config::{self, ConfigLoader};
use fimon::logging::{init_logging, LoggingConfig};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("fimon starting");
    let as_json = wants_json(&cli.command);

    let context = match RunContext::new(cli.baseline.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing context: {}", e);
            eprintln!("{}", render_error(&e, as_json));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", render_error(&e, as_json));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // Without --verbose, logging stays off so command output is the only
    // thing on the terminal.
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(None)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    // CLI arguments take highest priority.
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    } else if config.file == PathBuf::from(".fimon/fimon.log") {
        // Resolve the placeholder default to the data directory.
        config.file = config::default_log_path();
    }

    config
}
