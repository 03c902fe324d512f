//! Integration tests for external link probing
//!
//! Probe targets are served by wiremock with a mix of statuses; transport
//! failures use a port nothing listens on.

use page_inspector::analyzer::{count_inaccessible, probe_link, ProbeOutcome, ProbeTarget};
use page_inspector::config::Config;
use page_inspector::{AnalyzeError, Analyzer, ProbeFailurePolicy};
use reqwest::Client;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE: &str = "http://127.0.0.1:1/unreachable";

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts one route per status and returns the probe targets in that order
async fn mixed_targets(server: &MockServer) -> Vec<ProbeTarget> {
    let statuses = [200, 404, 204, 500, 400, 301, 503, 200];
    let mut targets = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        let route = format!("/status/{}/{}", i, status);
        mount_status(server, &route, *status).await;
        let href = format!("{}{}", server.uri(), route);
        targets.push(ProbeTarget {
            url: Url::parse(&href).ok(),
            href,
        });
    }
    targets
}

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_probe_link_statuses() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/ok", 200).await;
    mount_status(&mock_server, "/missing", 404).await;
    mount_status(&mock_server, "/boom", 500).await;

    let client = client();
    let base = Url::parse(&mock_server.uri()).unwrap();

    assert_eq!(
        probe_link(&client, &base.join("/ok").unwrap()).await,
        ProbeOutcome::Accessible(200)
    );
    assert_eq!(
        probe_link(&client, &base.join("/missing").unwrap()).await,
        ProbeOutcome::Inaccessible(404)
    );
    assert_eq!(
        probe_link(&client, &base.join("/boom").unwrap()).await,
        ProbeOutcome::Inaccessible(500)
    );
    assert!(matches!(
        probe_link(&client, &Url::parse(UNREACHABLE).unwrap()).await,
        ProbeOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn test_count_is_independent_of_concurrency() {
    let mock_server = MockServer::start().await;
    let targets = mixed_targets(&mock_server).await;
    let client = client();

    // 404, 500, 400, 503
    for concurrency in [1, 2, 3, 8, 32] {
        let count = count_inaccessible(
            &client,
            &targets,
            concurrency,
            ProbeFailurePolicy::Abort,
        )
        .await
        .unwrap();
        assert_eq!(count, 4, "concurrency {}", concurrency);
    }
}

#[tokio::test]
async fn test_reversed_order_gives_same_count() {
    let mock_server = MockServer::start().await;
    let mut targets = mixed_targets(&mock_server).await;
    let client = client();

    let forward = count_inaccessible(&client, &targets, 4, ProbeFailurePolicy::Abort)
        .await
        .unwrap();
    targets.reverse();
    let backward = count_inaccessible(&client, &targets, 4, ProbeFailurePolicy::Abort)
        .await
        .unwrap();

    assert_eq!(forward, backward);
}

#[tokio::test]
async fn test_transport_failure_counts_as_inaccessible() {
    let mock_server = MockServer::start().await;
    let mut targets = mixed_targets(&mock_server).await;
    targets.push(ProbeTarget {
        href: UNREACHABLE.to_string(),
        url: Url::parse(UNREACHABLE).ok(),
    });

    let count = count_inaccessible(
        &client(),
        &targets,
        4,
        ProbeFailurePolicy::CountInaccessible,
    )
    .await
    .unwrap();

    assert_eq!(count, 5);
    assert!(count <= targets.len());
}

#[tokio::test]
async fn test_transport_failure_aborts_under_abort_policy() {
    let mock_server = MockServer::start().await;
    let mut targets = mixed_targets(&mock_server).await;
    targets.push(ProbeTarget {
        href: UNREACHABLE.to_string(),
        url: Url::parse(UNREACHABLE).ok(),
    });

    let err = count_inaccessible(&client(), &targets, 4, ProbeFailurePolicy::Abort)
        .await
        .unwrap_err();

    match err {
        AnalyzeError::ProbeFailed { url, .. } => assert_eq!(url, UNREACHABLE),
        other => panic!("Expected ProbeFailed, got {:?}", other),
    }
}

fn page_with_links(links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!("<a href=\"{}\">link</a>\n", href))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Links</title></head><body>{}</body></html>",
        anchors
    )
}

fn analyzer_with(policy: ProbeFailurePolicy) -> Analyzer {
    let mut config = Config::default();
    config.analyzer.request_timeout_secs = 5;
    config.analyzer.connect_timeout_secs = 2;
    config.analyzer.probe_failure_policy = policy;
    Analyzer::new(&config).unwrap()
}

#[tokio::test]
async fn test_analysis_counts_inaccessible_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_status(&mock_server, "/fine", 200).await;
    mount_status(&mock_server, "/dead", 404).await;
    mount_status(&mock_server, "/broken", 500).await;

    let page = page_with_links(&[
        format!("{}/fine", base_url),
        format!("{}/dead", base_url),
        "/internal".to_string(),
        format!("{}/broken", base_url),
    ]);
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let result = analyzer_with(ProbeFailurePolicy::Abort)
        .analyze(&format!("{}/", base_url))
        .await
        .unwrap();

    assert_eq!(result.external_link_count, 3);
    assert_eq!(result.internal_link_count, 1);
    assert_eq!(result.inaccessible_link_count, 2);
}

#[tokio::test]
async fn test_analysis_probe_failure_policies() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_status(&mock_server, "/fine", 200).await;

    let page = page_with_links(&[format!("{}/fine", base_url), UNREACHABLE.to_string()]);
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", base_url);

    let lenient = analyzer_with(ProbeFailurePolicy::CountInaccessible)
        .analyze(&url)
        .await
        .unwrap();
    assert_eq!(lenient.external_link_count, 2);
    assert_eq!(lenient.inaccessible_link_count, 1);

    let strict = analyzer_with(ProbeFailurePolicy::Abort).analyze(&url).await;
    assert!(matches!(strict, Err(AnalyzeError::ProbeFailed { .. })));
}
