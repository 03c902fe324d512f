//! The record produced for every analyzed page

use crate::analyzer::HtmlVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signals derived from one page
///
/// Created once per analysis and never mutated by the analyzer afterwards.
/// It carries no identifier; ids belong to the record store.
///
/// Field names on the wire follow the established API (`htmltitle`,
/// `internalink`, ...). Every field defaults when absent so that partial
/// bodies can be accepted on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// The URL that was analyzed
    pub url: String,

    /// Title text, or one of the title sentinels
    #[serde(rename = "htmltitle")]
    pub page_title: String,

    /// Declared HTML version
    #[serde(rename = "htmlversion")]
    pub html_version: HtmlVersion,

    /// Occurrences per heading level, `h1` through `h6`
    #[serde(rename = "headingcount")]
    pub heading_counts: BTreeMap<String, usize>,

    #[serde(rename = "externallink")]
    pub external_link_count: usize,

    #[serde(rename = "internalink")]
    pub internal_link_count: usize,

    /// External links answering with a status >= 399
    #[serde(rename = "inaccessible")]
    pub inaccessible_link_count: usize,

    #[serde(rename = "islogin")]
    pub is_login: bool,
}

impl AnalysisResult {
    /// Total number of anchors carrying an `href`
    pub fn total_link_count(&self) -> usize {
        self.external_link_count + self.internal_link_count
    }

    /// Count recorded for a heading level, 0 when absent
    pub fn heading_count(&self, level: &str) -> usize {
        self.heading_counts.get(level).copied().unwrap_or(0)
    }
}
