//! Queryable document model
//!
//! A [`Document`] keeps the raw markup next to the parsed tree. Title and
//! doctype extraction scan the raw text; headings, links, and inputs are
//! queried on the tree.

use scraper::{ElementRef, Html, Selector};

/// A basic element selector: tag name, required attributes, and
/// attribute-equals filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementQuery {
    tag: String,
    required_attrs: Vec<String>,
    attr_values: Vec<(String, String)>,
}

impl ElementQuery {
    /// Matches every element with the given tag name
    pub fn tag(name: &str) -> Self {
        Self {
            tag: name.to_ascii_lowercase(),
            required_attrs: Vec::new(),
            attr_values: Vec::new(),
        }
    }

    /// Only match elements carrying `name`, whatever its value
    pub fn with_attr(mut self, name: &str) -> Self {
        self.required_attrs.push(name.to_ascii_lowercase());
        self
    }

    /// Only match elements whose `name` attribute equals `value`
    pub fn with_attr_value(mut self, name: &str, value: &str) -> Self {
        self.attr_values
            .push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// CSS form understood by the selector engine, e.g. `input[name][type="password"]`
    pub fn to_css(&self) -> String {
        let mut css = self.tag.clone();
        for attr in &self.required_attrs {
            css.push('[');
            css.push_str(attr);
            css.push(']');
        }
        for (attr, value) in &self.attr_values {
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            css.push_str(&format!("[{}=\"{}\"]", attr, escaped));
        }
        css
    }

    // The parse result borrows `css`, so it is bound before `css` drops.
    #[allow(clippy::let_and_return)]
    fn selector(&self) -> Option<Selector> {
        let css = self.to_css();
        let selector = match Selector::parse(&css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::debug!("Ignoring unparseable selector '{}': {:?}", css, e);
                None
            }
        };
        selector
    }
}

/// Raw markup plus its parsed tree
///
/// Scoped to a single analysis; the tree is not `Send` and must be dropped
/// before the analysis awaits on the network again.
pub struct Document<'a> {
    raw: &'a str,
    tree: Html,
}

impl<'a> Document<'a> {
    /// Parses markup into a document. HTML parsing never fails; malformed
    /// input yields a best-effort tree.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            tree: Html::parse_document(raw),
        }
    }

    /// The markup exactly as fetched
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// All elements matching `query`, in document order
    pub fn select(&self, query: &ElementQuery) -> Vec<ElementRef<'_>> {
        match query.selector() {
            Some(selector) => self.tree.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Number of elements matching `query`
    pub fn count(&self, query: &ElementQuery) -> usize {
        match query.selector() {
            Some(selector) => self.tree.select(&selector).count(),
            None => 0,
        }
    }

    /// Values of `attr` on every element matching `query`, in document order
    ///
    /// Elements without the attribute are skipped.
    pub fn attr_values(&self, query: &ElementQuery, attr: &str) -> Vec<&str> {
        self.select(query)
            .into_iter()
            .filter_map(|element| element.value().attr(attr))
            .collect()
    }
}
