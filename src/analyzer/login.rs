//! Login-page heuristic
//!
//! Two short-circuiting checks: the title first, then the names of input
//! fields. No other signal is consulted.

use crate::analyzer::document::{Document, ElementQuery};

const TITLE_KEYWORDS: [&str; 2] = ["sign in", "login"];
const INPUT_NAME_KEYWORD: &str = "password";

/// Which check classified the page as a login page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginSignal {
    /// The title mentions signing in
    Title,

    /// An input field is named like a password field
    PasswordInput,

    /// Neither check matched
    None,
}

impl LoginSignal {
    pub fn is_login(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Whether a title looks like the title of a login page
pub fn title_signals_login(title: &str) -> bool {
    let lowered = title.to_lowercase();
    TITLE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Whether any of the input names looks like a password field
pub fn input_names_signal_login<'a, I>(names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .any(|name| name.to_lowercase().contains(INPUT_NAME_KEYWORD))
}

/// Classifies a page as a login page
///
/// # Arguments
///
/// * `title` - The extracted title, `None` when the page has none
/// * `document` - The parsed page, scanned only when the title does not match
pub fn detect_login(title: Option<&str>, document: &Document<'_>) -> LoginSignal {
    if title.is_some_and(title_signals_login) {
        return LoginSignal::Title;
    }

    let inputs = ElementQuery::tag("input").with_attr("name");
    if input_names_signal_login(document.attr_values(&inputs, "name")) {
        return LoginSignal::PasswordInput;
    }

    LoginSignal::None
}
