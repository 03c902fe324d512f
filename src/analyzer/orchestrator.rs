//! Page analysis orchestration
//!
//! [`Analyzer::analyze`] is the only entry point callers need. It fetches the
//! page, runs every extractor over one parsed document, probes the external
//! links, and assembles an [`AnalysisResult`].

use crate::analyzer::doctype::{classify_doctype, HtmlVersion};
use crate::analyzer::document::Document;
use crate::analyzer::fetcher::{build_http_client, fetch_document, validate_target};
use crate::analyzer::headings::count_headings;
use crate::analyzer::links::{classify_links, ProbeTarget};
use crate::analyzer::login::{detect_login, LoginSignal};
use crate::analyzer::prober::{count_inaccessible, ProbeFailurePolicy};
use crate::analyzer::result::AnalysisResult;
use crate::analyzer::title::{extract_title, TitleOutcome};
use crate::config::{AnalyzerConfig, Config};
use crate::AnalyzeError;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Instant;
use url::Url;

/// Everything derived from the markup before any link is probed
#[derive(Debug, Clone)]
pub struct PageSignals {
    pub title: TitleOutcome,
    pub html_version: HtmlVersion,
    pub heading_counts: BTreeMap<String, usize>,
    pub external_links: Vec<ProbeTarget>,
    pub internal_link_count: usize,
    pub login: LoginSignal,
}

impl PageSignals {
    /// Combines the signals with the probe count into the final record
    pub fn into_result(self, url: &str, inaccessible_link_count: usize) -> AnalysisResult {
        AnalysisResult {
            url: url.to_string(),
            page_title: self.title.into_field(),
            html_version: self.html_version,
            heading_counts: self.heading_counts,
            external_link_count: self.external_links.len(),
            internal_link_count: self.internal_link_count,
            inaccessible_link_count,
            is_login: self.login.is_login(),
        }
    }
}

/// Runs every markup extractor over one document
///
/// The parsed tree lives only for the duration of this call.
pub fn extract_signals(raw: &str, base_url: &Url) -> PageSignals {
    let document = Document::parse(raw);

    let title = extract_title(document.raw());
    let html_version = classify_doctype(document.raw());
    let heading_counts = count_headings(&document);
    let links = classify_links(&document, base_url);
    let login = detect_login(title.text(), &document);

    tracing::debug!(
        "Title: {:?}, version: {}, headings: {:?}, links: {} external / {} internal, login: {:?}",
        title,
        html_version,
        heading_counts,
        links.external_count(),
        links.internal_count,
        login
    );

    PageSignals {
        title,
        html_version,
        heading_counts,
        external_links: links.external,
        internal_link_count: links.internal_count,
        login,
    }
}

/// Analyzes pages with a shared HTTP client
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
    probe_concurrency: usize,
    probe_failure_policy: ProbeFailurePolicy,
}

impl Analyzer {
    /// Creates an analyzer from the full configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Analyzer)` - Ready to analyze
    /// * `Err(AnalyzeError::ClientBuild)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, AnalyzeError> {
        let client = build_http_client(&config.analyzer, &config.user_agent)
            .map_err(AnalyzeError::ClientBuild)?;
        Ok(Self::with_client(client, &config.analyzer))
    }

    /// Creates an analyzer around an existing client
    pub fn with_client(client: Client, config: &AnalyzerConfig) -> Self {
        Self {
            client,
            probe_concurrency: config.probe_concurrency,
            probe_failure_policy: config.probe_failure_policy,
        }
    }

    pub fn probe_failure_policy(&self) -> ProbeFailurePolicy {
        self.probe_failure_policy
    }

    /// Analyzes one page
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (http/https only)
    /// 2. Fetch the document; any non-200 status aborts
    /// 3. Extract title, doctype, headings, links, and the login verdict
    /// 4. Probe every external link
    ///
    /// # Returns
    ///
    /// * `Ok(AnalysisResult)` - All fields populated, sentinels where the page lacks data
    /// * `Err(AnalyzeError)` - The URL is invalid, the fetch failed, or a probe
    ///   failed under [`ProbeFailurePolicy::Abort`]. No partial record is produced.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalyzeError> {
        let target = validate_target(url)?;
        let started = Instant::now();
        tracing::info!("Analyzing {}", target);

        let body = fetch_document(&self.client, &target).await?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), target);

        let signals = extract_signals(&body, &target);

        let inaccessible = count_inaccessible(
            &self.client,
            &signals.external_links,
            self.probe_concurrency,
            self.probe_failure_policy,
        )
        .await?;

        let result = signals.into_result(url.trim(), inaccessible);
        tracing::info!(
            "Analyzed {} in {:?}: {} external ({} inaccessible), {} internal",
            target,
            started.elapsed(),
            result.external_link_count,
            result.inaccessible_link_count,
            result.internal_link_count
        );

        Ok(result)
    }
}
