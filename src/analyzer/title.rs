//! Title extraction from raw markup
//!
//! A literal scan for the `<title>` / `</title>` marker pair. This is not a
//! tag-aware parse: `<title id="x">` is not recognized, and the text between
//! the markers is returned verbatim.

const OPEN_MARKER: &str = "<title>";
const CLOSE_MARKER: &str = "</title>";

/// Stored in place of the title when no `<title>` marker exists
pub const TITLE_NOT_FOUND: &str = "No title element found";

/// Stored in place of the title when `<title>` is never closed
pub const TITLE_INCOMPLETE: &str = "No closing tag for title found";

/// Outcome of scanning a page for its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    Found(String),
    NotFound,
    Incomplete,
}

impl TitleOutcome {
    /// The title text, if one was found
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            Self::NotFound | Self::Incomplete => None,
        }
    }

    /// Value stored in the record: the text itself or a sentinel
    pub fn into_field(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::NotFound => TITLE_NOT_FOUND.to_string(),
            Self::Incomplete => TITLE_INCOMPLETE.to_string(),
        }
    }
}

/// Finds the text between the first `<title>` and the first `</title>` after it
pub fn extract_title(raw: &str) -> TitleOutcome {
    let Some(open) = raw.find(OPEN_MARKER) else {
        return TitleOutcome::NotFound;
    };

    let start = open + OPEN_MARKER.len();
    match raw[start..].find(CLOSE_MARKER) {
        Some(len) => TitleOutcome::Found(raw[start..start + len].to_string()),
        None => TitleOutcome::Incomplete,
    }
}
