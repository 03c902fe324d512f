//! Output module for presenting analysis results on the command line
//!
//! This module handles:
//! - Rendering a result as a human-readable report
//! - Rendering a result as JSON with the API field names

mod report;

pub use report::{print_report, render_report, Report};

use crate::analyzer::AnalysisResult;

/// Renders a result as pretty-printed JSON
pub fn render_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_uses_wire_names() {
        let json = render_json(&AnalysisResult::default()).unwrap();
        assert!(json.contains("\"htmltitle\""));
        assert!(json.contains("\"internalink\""));
        assert!(!json.contains("\"id\""));
    }
}
