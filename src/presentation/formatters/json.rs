use crate::presentation::types::Dashboard;

/// JSON formatter for dashboards
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format dashboard as pretty-printed JSON
    pub fn format(dashboard: &Dashboard) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(dashboard)
    }

    /// Format dashboard as compact JSON (no whitespace)
    pub fn format_compact(dashboard: &Dashboard) -> Result<String, serde_json::Error> {
        serde_json::to_string(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::presentation::{DashboardGenerator, Selection};

    #[test]
    fn test_format_json() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::all(), None).unwrap();
        let json = JsonFormatter::format(&dashboard).unwrap();

        assert!(json.contains("\"variant\": \"a\""));
        assert!(json.contains("\"total_score\": 25"));
        assert!(json.contains("\"quadrant\": \"quick_wins\""));
    }

    #[test]
    fn test_format_compact() {
        let dashboard = DashboardGenerator::generate(&Dataset::field_survey(), &Selection::all(), None).unwrap();
        let json = JsonFormatter::format_compact(&dashboard).unwrap();

        // Compact format should have no indentation
        assert!(!json.contains("\n  "));
        assert!(json.contains("\"scatter\":null"));
    }
}
