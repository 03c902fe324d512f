//! Doctype classification
//!
//! Matches the lower-cased page text against known doctype declarations.
//! The table is checked in order and the first match wins, so `html5` takes
//! priority when several declarations appear in one page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTML version declared by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HtmlVersion {
    #[serde(rename = "html5")]
    Html5,

    #[serde(rename = "HTML4.01-Strict")]
    Html401Strict,

    #[serde(rename = "HTML4.01-Transitional")]
    Html401Transitional,

    #[serde(rename = "HTML4.01-Frameset")]
    Html401Frameset,

    /// No known declaration was found
    #[default]
    #[serde(rename = "No version found")]
    NotFound,
}

impl HtmlVersion {
    /// The label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html5 => "html5",
            Self::Html401Strict => "HTML4.01-Strict",
            Self::Html401Transitional => "HTML4.01-Transitional",
            Self::Html401Frameset => "HTML4.01-Frameset",
            Self::NotFound => "No version found",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Known declarations, lower-cased, in match priority order
///
/// Legacy entries stop at the public identifier so that declarations followed
/// by a system identifier still match.
pub const DOCTYPE_SIGNATURES: [(HtmlVersion, &str); 4] = [
    (HtmlVersion::Html5, "<!doctype html>"),
    (
        HtmlVersion::Html401Strict,
        "<!doctype html public \"-//w3c//dtd html 4.01//en\"",
    ),
    (
        HtmlVersion::Html401Transitional,
        "<!doctype html public \"-//w3c//dtd html 4.01 transitional//en\"",
    ),
    (
        HtmlVersion::Html401Frameset,
        "<!doctype html public \"-//w3c//dtd html 4.01 frameset//en\"",
    ),
];

/// Classifies the declared HTML version of a page
pub fn classify_doctype(raw: &str) -> HtmlVersion {
    let lowered = raw.to_lowercase();

    DOCTYPE_SIGNATURES
        .iter()
        .find(|(_, signature)| lowered.contains(signature))
        .map(|(version, _)| *version)
        .unwrap_or(HtmlVersion::NotFound)
}
