//! Human-readable analysis report

use crate::analyzer::{AnalysisResult, HEADING_LEVELS};
use std::fmt;

/// Plain-text view of a result
pub struct Report<'a>(pub &'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "=== Page Analysis ===\n")?;
        writeln!(f, "URL: {}", result.url)?;
        writeln!(f, "Title: {}", result.page_title)?;
        writeln!(f, "HTML version: {}", result.html_version)?;
        writeln!(f, "Login page: {}", if result.is_login { "yes" } else { "no" })?;
        writeln!(f)?;

        writeln!(f, "Headings:")?;
        for level in HEADING_LEVELS {
            writeln!(f, "  {}: {}", level, result.heading_count(level))?;
        }
        writeln!(f)?;

        writeln!(f, "Links:")?;
        writeln!(f, "  Internal: {}", result.internal_link_count)?;
        writeln!(f, "  External: {}", result.external_link_count)?;

        let percentage = if result.external_link_count > 0 {
            (result.inaccessible_link_count as f64 / result.external_link_count as f64) * 100.0
        } else {
            0.0
        };
        writeln!(
            f,
            "  Inaccessible: {} ({:.1}% of external)",
            result.inaccessible_link_count, percentage
        )
    }
}

/// Renders a result as a plain-text report
///
/// # Arguments
///
/// * `result` - The analysis to display
pub fn render_report(result: &AnalysisResult) -> String {
    Report(result).to_string()
}

/// Prints the report to stdout
pub fn print_report(result: &AnalysisResult) {
    print!("{}", render_report(result));
}
