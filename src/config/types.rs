use crate::analyzer::ProbeFailurePolicy;
use serde::Deserialize;

/// Main configuration structure for Page-Inspector
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub analyzer: AnalyzerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// HTTP API listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the CRUD API binds to
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8100".to_string(),
        }
    }
}

/// Page analysis behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Upper bound for each outbound request, fetch and probes alike (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Upper bound for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Number of external links probed at the same time
    #[serde(rename = "probe-concurrency")]
    pub probe_concurrency: usize,

    /// What a transport failure while probing an external link means
    #[serde(rename = "probe-failure-policy")]
    pub probe_failure_policy: ProbeFailurePolicy,

    /// Redirect hops followed before a request is considered failed
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15,
            connect_timeout_secs: 5,
            probe_concurrency: 8,
            probe_failure_policy: ProbeFailurePolicy::default(),
            max_redirects: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: "PageInspector".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}
