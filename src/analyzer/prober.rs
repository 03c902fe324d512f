//! External link accessibility probing
//!
//! Every external link gets one GET. A response status of 399 or higher
//! counts the link as inaccessible. Probes run through a bounded pool of
//! concurrent requests; the resulting count does not depend on the order in
//! which probes complete.

use crate::analyzer::fetcher::describe_transport_error;
use crate::analyzer::links::ProbeTarget;
use crate::AnalyzeError;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Statuses at or above this value mark a link as inaccessible
pub const INACCESSIBLE_STATUS_THRESHOLD: u16 = 399;

/// What a transport failure while probing a link means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeFailurePolicy {
    /// The link is counted as inaccessible and probing continues
    #[default]
    CountInaccessible,

    /// The whole analysis fails with [`AnalyzeError::ProbeFailed`]
    Abort,
}

/// Result of probing a single link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The link answered with a status below the threshold
    Accessible(u16),

    /// The link answered with an error status
    Inaccessible(u16),

    /// No response was received
    Failed(String),
}

/// Probes one URL with a GET
pub async fn probe_link(client: &Client, url: &Url) -> ProbeOutcome {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if status >= INACCESSIBLE_STATUS_THRESHOLD {
                ProbeOutcome::Inaccessible(status)
            } else {
                ProbeOutcome::Accessible(status)
            }
        }
        Err(e) => ProbeOutcome::Failed(describe_transport_error(&e)),
    }
}

async fn probe_target(client: &Client, target: &ProbeTarget) -> ProbeOutcome {
    match &target.url {
        Some(url) => probe_link(client, url).await,
        None => ProbeOutcome::Failed("href cannot be resolved to a URL".to_string()),
    }
}

/// Counts the inaccessible links among `targets`
///
/// # Arguments
///
/// * `client` - The shared HTTP client, whose timeout bounds every probe
/// * `targets` - External links in document order
/// * `concurrency` - Maximum number of probes in flight
/// * `policy` - How transport failures are treated
///
/// # Returns
///
/// * `Ok(count)` - Number of inaccessible links, never more than `targets.len()`
/// * `Err(AnalyzeError::ProbeFailed)` - A probe failed under [`ProbeFailurePolicy::Abort`];
///   probes still in flight are dropped
pub async fn count_inaccessible(
    client: &Client,
    targets: &[ProbeTarget],
    concurrency: usize,
    policy: ProbeFailurePolicy,
) -> Result<usize, AnalyzeError> {
    // Futures are built up front so the stream holds no higher-ranked closure
    // and the analysis future stays Send.
    let probes: Vec<_> = targets
        .iter()
        .map(|target| async move { (target, probe_target(client, target).await) })
        .collect();
    let mut outcomes = stream::iter(probes).buffer_unordered(concurrency.max(1));

    let mut inaccessible = 0;
    while let Some((target, outcome)) = outcomes.next().await {
        match outcome {
            ProbeOutcome::Accessible(status) => {
                tracing::debug!("Link {} is accessible ({})", target.href, status);
            }
            ProbeOutcome::Inaccessible(status) => {
                tracing::debug!("Link {} is inaccessible ({})", target.href, status);
                inaccessible += 1;
            }
            ProbeOutcome::Failed(message) => match policy {
                ProbeFailurePolicy::Abort => {
                    return Err(AnalyzeError::ProbeFailed {
                        url: target.href.clone(),
                        message,
                    });
                }
                ProbeFailurePolicy::CountInaccessible => {
                    tracing::warn!(
                        "Probe of {} failed, counting as inaccessible: {}",
                        target.href,
                        message
                    );
                    inaccessible += 1;
                }
            },
        }
    }

    Ok(inaccessible)
}
