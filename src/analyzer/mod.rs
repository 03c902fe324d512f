//! Page analysis pipeline
//!
//! This module contains everything needed to turn a URL into an
//! [`AnalysisResult`]:
//! - HTTP fetching of the primary document
//! - Building a queryable document tree
//! - Title, doctype, heading, and link extraction
//! - Probing external links for accessibility
//! - The login-page heuristic
//! - Orchestration of all of the above

mod doctype;
mod document;
mod fetcher;
mod headings;
mod links;
mod login;
mod orchestrator;
mod prober;
mod result;
mod title;

pub use doctype::{classify_doctype, HtmlVersion, DOCTYPE_SIGNATURES};
pub use document::{Document, ElementQuery};
pub use fetcher::{build_http_client, fetch_document, validate_target};
pub use headings::{count_headings, HEADING_LEVELS};
pub use links::{classify_links, is_external, LinkSummary, ProbeTarget};
pub use login::{detect_login, input_names_signal_login, title_signals_login, LoginSignal};
pub use orchestrator::{extract_signals, Analyzer, PageSignals};
pub use prober::{
    count_inaccessible, probe_link, ProbeFailurePolicy, ProbeOutcome, INACCESSIBLE_STATUS_THRESHOLD,
};
pub use result::AnalysisResult;
pub use title::{extract_title, TitleOutcome, TITLE_INCOMPLETE, TITLE_NOT_FOUND};
