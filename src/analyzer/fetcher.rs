//! HTTP fetcher implementation
//!
//! This module handles the outbound requests of an analysis:
//! - Building the shared HTTP client with user agent and timeouts
//! - Validating the target URL before any network I/O
//! - Fetching the primary document with a single GET
//! - Classifying transport errors into readable messages

use crate::config::{AnalyzerConfig, UserAgentConfig};
use crate::AnalyzeError;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by the fetch and every probe
///
/// # Arguments
///
/// * `analyzer` - Timeouts and redirect limit
/// * `user_agent` - Identification sent with every request
///
/// # Example
///
/// ```no_run
/// use page_inspector::analyzer::build_http_client;
/// use page_inspector::config::Config;
///
/// let config = Config::default();
/// let client = build_http_client(&config.analyzer, &config.user_agent).unwrap();
/// ```
pub fn build_http_client(
    analyzer: &AnalyzerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.client_name,
        user_agent.client_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(analyzer.request_timeout_secs))
        .connect_timeout(Duration::from_secs(analyzer.connect_timeout_secs))
        .redirect(Policy::limited(analyzer.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Parses the URL to analyze and rejects anything that is not http(s)
pub fn validate_target(url: &str) -> Result<Url, AnalyzeError> {
    let parsed = Url::parse(url.trim()).map_err(|e| AnalyzeError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(AnalyzeError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Fetches the primary document
///
/// Issues exactly one GET. Anything other than `200 OK` after redirects is a
/// [`AnalyzeError::FetchFailed`] carrying the status code; transport failures
/// (DNS, connection, timeout, body read) are `FetchFailed` without a status.
pub async fn fetch_document(client: &Client, url: &Url) -> Result<String, AnalyzeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| AnalyzeError::FetchFailed {
            url: url.to_string(),
            status: None,
            message: describe_transport_error(&e),
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AnalyzeError::FetchFailed {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    response.text().await.map_err(|e| AnalyzeError::FetchFailed {
        url: url.to_string(),
        status: None,
        message: describe_transport_error(&e),
    })
}

/// Turns a reqwest error into a short description of what went wrong
pub(crate) fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else if error.is_redirect() {
        format!("Redirect error: {}", error)
    } else {
        error.to_string()
    }
}
