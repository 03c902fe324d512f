//! Page-Inspector: structural and SEO signals for a single web page
//!
//! This crate fetches an HTML document, derives a fixed set of signals from it
//! (title, declared HTML version, heading counts, link partition, inaccessible
//! external links, login-page heuristic) and keeps the resulting records in a
//! store served over a small CRUD HTTP API.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod server;
pub mod store;

use thiserror::Error;

/// Main error type for Page-Inspector operations
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis error: {0}")]
    Analyze(#[from] AnalyzeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors that abort the analysis of a page
///
/// Only these surface to callers; every other extractor problem is absorbed
/// into a sentinel field value.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Fetch failed for {url}: {}", describe_failure(.status, .message))]
    FetchFailed {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Probe failed for {url}: {message}")]
    ProbeFailed { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

fn describe_failure(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("status code error: {} {}", code, message),
        None => message.to_string(),
    }
}

/// Result type alias for Page-Inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{AnalysisResult, Analyzer, HtmlVersion, ProbeFailurePolicy};
pub use config::Config;
pub use store::{MemoryStore, RecordStore, StoredRecord};
