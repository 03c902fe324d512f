//! Link classification
//!
//! Partitions every `<a href>` into internal or external. A link is external
//! when its href contains an `http://` or `https://` scheme marker anywhere;
//! everything else (relative paths, fragments, `mailto:`...) is internal.

use crate::analyzer::document::{Document, ElementQuery};
use url::Url;

const EXTERNAL_MARKERS: [&str; 2] = ["http://", "https://"];

/// An external link queued for the accessibility probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// The href exactly as written in the page
    pub href: String,

    /// The href resolved against the page URL, `None` when it cannot be resolved
    pub url: Option<Url>,
}

impl ProbeTarget {
    fn new(href: &str, base: &Url) -> Self {
        Self {
            href: href.to_string(),
            url: base.join(href).ok(),
        }
    }
}

/// Result of classifying the anchors of a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// External links in document order
    pub external: Vec<ProbeTarget>,

    pub internal_count: usize,
}

impl LinkSummary {
    pub fn external_count(&self) -> usize {
        self.external.len()
    }

    /// Total number of anchors carrying an `href`
    pub fn total(&self) -> usize {
        self.external.len() + self.internal_count
    }
}

/// Whether an href points outside the page's site
pub fn is_external(href: &str) -> bool {
    EXTERNAL_MARKERS.iter().any(|marker| href.contains(marker))
}

/// Classifies every anchor with an `href` attribute
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - The page URL, used to resolve external hrefs for probing
pub fn classify_links(document: &Document<'_>, base_url: &Url) -> LinkSummary {
    let anchors = ElementQuery::tag("a").with_attr("href");
    let mut summary = LinkSummary::default();

    for href in document.attr_values(&anchors, "href") {
        if is_external(href) {
            summary.external.push(ProbeTarget::new(href, base_url));
        } else {
            summary.internal_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    fn classify(html: &str) -> LinkSummary {
        let document = Document::parse(html);
        classify_links(&document, &base_url())
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("http://other.com"));
        assert!(is_external("https://example.com/self"));
        assert!(is_external("/redirect?to=https://other.com"));

        assert!(!is_external("/about"));
        assert!(!is_external("page.html"));
        assert!(!is_external("#top"));
        assert!(!is_external("//cdn.example.com/lib.js"));
        assert!(!is_external("mailto:me@example.com"));
        assert!(!is_external(""));
    }

    #[test]
    fn test_partition_counts() {
        let summary = classify(
            r##"<body>
                <a href="/one">1</a>
                <a href="https://other.com/a">2</a>
                <a href="#frag">3</a>
                <a href="http://third.org/">4</a>
                <a href="">5</a>
                <a name="anchor-only">6</a>
            </body>"##,
        );

        assert_eq!(summary.external_count(), 2);
        assert_eq!(summary.internal_count, 3);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_external_in_document_order() {
        let summary = classify(
            r#"<a href="https://b.com/">b</a><a href="/x">x</a><a href="https://a.com/">a</a>"#,
        );
        let hrefs: Vec<&str> = summary.external.iter().map(|t| t.href.as_str()).collect();
        assert_eq!(hrefs, vec!["https://b.com/", "https://a.com/"]);
    }

    #[test]
    fn test_duplicates_are_counted_each_time() {
        let summary = classify(
            r#"<a href="https://a.com/">1</a><a href="https://a.com/">2</a><a href="/x">3</a><a href="/x">4</a>"#,
        );
        assert_eq!(summary.external_count(), 2);
        assert_eq!(summary.internal_count, 2);
    }

    #[test]
    fn test_probe_target_resolution() {
        let summary = classify(
            r#"<a href="https://other.com/page">abs</a><a href="/go?u=http://x.org">redirect</a>"#,
        );

        assert_eq!(
            summary.external[0].url.as_ref().map(Url::as_str),
            Some("https://other.com/page")
        );
        assert_eq!(
            summary.external[1].url.as_ref().map(Url::as_str),
            Some("https://example.com/go?u=http://x.org")
        );
    }

    #[test]
    fn test_unresolvable_probe_target() {
        let summary = classify(r#"<a href="http://[broken">bad</a>"#);
        assert_eq!(summary.external_count(), 1);
        assert_eq!(summary.external[0].url, None);
    }
}
