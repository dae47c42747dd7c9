//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI, HTML and plain-text
//! output of trail reports.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::{format_ansi, format_trail_ansi};
pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::TrailReport;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format
    #[default]
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// The two rendered HTML snippets, head block first
    Html,
    /// Plain text summary
    Summary,
}

/// Format a single report in the specified format
pub fn format_output(report: &TrailReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Yaml => format_yaml(report),
        OutputFormat::Ansi => Ok(format_ansi(report)),
        OutputFormat::Html => Ok(format_html(report)),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Format several reports in the specified format
pub fn format_output_batch(
    reports: &[TrailReport],
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports).map_err(FormatError::from),
        OutputFormat::Yaml => serde_yaml::to_string(reports).map_err(FormatError::from),
        OutputFormat::Ansi => Ok(reports.iter().map(format_ansi).collect::<Vec<_>>().join("\n")),
        OutputFormat::Html => Ok(reports.iter().map(format_html).collect::<Vec<_>>().join("\n")),
        OutputFormat::Summary => Ok(format_summary_batch(reports)),
    }
}

/// Format the head and body snippets, or an HTML comment when there is no trail
fn format_html(report: &TrailReport) -> String {
    match (&report.structured_data, &report.visible_trail) {
        (Some(head), Some(body)) => format!("{}{}\n", head, body),
        _ => format!(
            "<!-- no breadcrumbs for {}: {} -->\n",
            report.request_url,
            report.reason.as_deref().unwrap_or("unknown")
        ),
    }
}

/// Format as plain text summary
fn format_summary(report: &TrailReport) -> String {
    let mut output = String::new();

    output.push_str("Breadcrumb Trail\n");
    output.push_str("================\n\n");
    output.push_str(&format!("URL:  {}\n", report.request_url));
    output.push_str(&format!("Base: {}\n", report.base_url));

    match &report.trail {
        Some(trail) => {
            output.push_str(&format!("Entries: {}\n\n", trail.len()));
            for (idx, entry) in trail.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. [{}] {}{} -> {}\n",
                    idx + 1,
                    entry.kind.label(),
                    entry.label,
                    if entry.active { " (active)" } else { "" },
                    entry.url
                ));
            }
        }
        None => {
            output.push_str(&format!(
                "\nNo trail: {}\n",
                report.reason.as_deref().unwrap_or("unknown")
            ));
        }
    }

    output
}

/// Format several reports as a plain text summary
fn format_summary_batch(reports: &[TrailReport]) -> String {
    let mut output = String::new();
    let with_trail = reports.iter().filter(|r| r.has_trail()).count();

    output.push_str("Breadcrumb Batch Results\n");
    output.push_str("========================\n\n");
    output.push_str(&format!("Requests: {}\n", reports.len()));
    output.push_str(&format!("With trail: {}\n", with_trail));
    output.push_str(&format!("Without trail: {}\n\n", reports.len() - with_trail));

    for report in reports {
        match &report.trail {
            Some(trail) => output.push_str(&format!("  {}  {}\n", report.request_url, trail.path())),
            None => output.push_str(&format!(
                "  {}  (none: {})\n",
                report.request_url,
                report.reason.as_deref().unwrap_or("unknown")
            )),
        }
    }

    output
}
