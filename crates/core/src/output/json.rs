//! JSON output formatter

use crate::models::TrailReport;
use crate::output::FormatError;

/// Format a report as pretty-printed JSON
pub fn format_json(report: &TrailReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}
