//! CLI output: error mapping and init/status presentation.

use crate::cli::parse::Commands;
use crate::engine::BuildOutcome;
use crate::error::CliError;
use crate::report::format_section_heading;
use owo_colors::OwoColorize;
use serde_json::json;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    e.to_string()
}

/// Render an error for the terminal, as a plain message or as the JSON
/// error envelope (`status: "error"` plus a message) when the invoked
/// command asked for JSON output.
pub fn render_error(e: &CliError, as_json: bool) -> String {
    if as_json {
        json!({
            "status": "error",
            "message": map_error(e),
        })
        .to_string()
    } else {
        map_error(e)
    }
}

/// Whether the invoked command requested JSON output.
pub fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Check { format, .. } | Commands::Status { format } => format == "json",
        Commands::Init { .. } => false,
    }
}

/// Human-readable summary of a baseline build.
pub fn format_init_summary(outcome: &BuildOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Baseline")));
    out.push_str(&format!(
        "  Files recorded: {}\n  Baseline file: {}\n",
        outcome.files_recorded,
        outcome.baseline_path.display()
    ));
    if !outcome.unreadable.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format_section_heading("Skipped (unreadable)")
        ));
        for path in &outcome.unreadable {
            out.push_str(&format!("  {} {}\n", "!".magenta(), path.magenta()));
        }
    }
    out
}
