//! Heading counts per level

use crate::analyzer::document::{Document, ElementQuery};
use std::collections::BTreeMap;

/// Heading levels, in order
pub const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Counts the elements at every heading level
///
/// Each level is counted on its own with an exact tag match. All six levels
/// are present in the returned map; levels that never occur hold 0.
pub fn count_headings(document: &Document<'_>) -> BTreeMap<String, usize> {
    HEADING_LEVELS
        .iter()
        .map(|level| (level.to_string(), document.count(&ElementQuery::tag(level))))
        .collect()
}
