//! YAML output formatter

use crate::models::TrailReport;
use crate::output::FormatError;

/// Format a report as YAML
pub fn format_yaml(report: &TrailReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::report_with_trail;

    #[test]
    fn test_format_yaml() {
        let yaml = format_yaml(&report_with_trail()).unwrap();
        assert!(yaml.contains("request_url:"));
        assert!(yaml.contains("trail:"));
        assert!(yaml.contains("Electronics"));
    }
}
