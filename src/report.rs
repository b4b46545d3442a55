//! Change report data and rendering.
//!
//! Produces the classified output of an integrity check plus baseline
//! status for `fimon status`. Rendering comes in two shapes: human-readable
//! text with section headings and summary tables, and pretty JSON for
//! machine consumers.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Classified outcome of comparing the current tree against the baseline.
///
/// Derived, never persisted. `unchanged_count` is a count rather than a
/// list; the path lists come out sorted, though ordering is not a contract
/// callers may rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport {
    pub status: String,
    /// RFC 3339 wall-clock time of the check.
    pub timestamp: String,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    /// Files that could not be hashed during this check. Reported rather
    /// than silently dropped so a file an attacker makes unreadable does
    /// not vanish from monitoring.
    pub unreadable: Vec<String>,
    pub unchanged_count: u64,
    /// Number of files in the current snapshot.
    pub total_files: u64,
}

impl ChangeReport {
    /// True when nothing was added, modified, deleted, or unreadable.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.unreadable.is_empty()
    }
}

/// Baseline bookkeeping for `fimon status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineStatus {
    pub baseline_path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a change report as human-readable text.
pub fn format_report_text(report: &ChangeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Integrity Check")));
    out.push_str(&format!("  Checked at: {}\n", report.timestamp));
    out.push_str(&format!("  Total files: {}\n\n", report.total_files));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Change", "Count"]);
    table.add_row(vec!["Added".to_string(), report.added.len().to_string()]);
    table.add_row(vec![
        "Modified".to_string(),
        report.modified.len().to_string(),
    ]);
    table.add_row(vec![
        "Deleted".to_string(),
        report.deleted.len().to_string(),
    ]);
    table.add_row(vec![
        "Unreadable".to_string(),
        report.unreadable.len().to_string(),
    ]);
    table.add_row(vec![
        "Unchanged".to_string(),
        report.unchanged_count.to_string(),
    ]);
    out.push_str(&format!("{}\n", table));

    if report.is_clean() {
        out.push_str(&format!("\n{}\n", "No changes detected.".green()));
        return out;
    }

    if !report.added.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Added")));
        for path in &report.added {
            out.push_str(&format!("  {} {}\n", "+".green(), path.green()));
        }
    }
    if !report.modified.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Modified")));
        for path in &report.modified {
            out.push_str(&format!("  {} {}\n", "~".yellow(), path.yellow()));
        }
    }
    if !report.deleted.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Deleted")));
        for path in &report.deleted {
            out.push_str(&format!("  {} {}\n", "-".red(), path.red()));
        }
    }
    if !report.unreadable.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Unreadable")));
        for path in &report.unreadable {
            out.push_str(&format!("  {} {}\n", "!".magenta(), path.magenta()));
        }
    }

    out
}

/// Format a change report as pretty JSON.
pub fn format_report_json(report: &ChangeReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Format baseline status as human-readable text.
pub fn format_status_text(status: &BaselineStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Baseline")));
    out.push_str(&format!("  Location: {}\n", status.baseline_path));
    if !status.exists {
        out.push_str("  Present: no\n\n");
        out.push_str("Run `fimon init <root>` to create a baseline.\n");
        return out;
    }
    out.push_str("  Present: yes\n");
    if let Some(entries) = status.entries {
        out.push_str(&format!("  Tracked files: {}\n", entries));
    }
    if let Some(size) = status.size_bytes {
        out.push_str(&format!("  File size: {} bytes\n", size));
    }
    out
}

/// Format baseline status as pretty JSON.
pub fn format_status_json(status: &BaselineStatus) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(status)
}
