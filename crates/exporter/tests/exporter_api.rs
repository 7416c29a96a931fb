//! Integration tests for the exporter's HTTP surface.
//!
//! Scans themselves are exercised only up to the immediate `/scan`
//! response -- the gauges are fed directly through `ScanMetrics::update`
//! so the suite never needs a browser.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, body_text, build_test_app, get, post_json, test_state};
use serde_json::json;

use a11ymon_core::{AxeResults, PageScan};

fn fixture_scan(url: &str) -> PageScan {
    let results: AxeResults = serde_json::from_value(json!({
        "violations": [
            {"id": "image-alt", "impact": "critical", "nodes": [{}, {}]}
        ],
        "passes": [{"id": "document-title", "nodes": [{}]}],
        "incomplete": []
    }))
    .unwrap();
    PageScan {
        url: url.to_string(),
        results,
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(test_state());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(test_state());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(test_state());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
}

// ---------------------------------------------------------------------------
// Test: /status reports nothing before the first scan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_is_empty_before_first_scan() {
    let app = build_test_app(test_state());
    let response = get(app, "/status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "running");
    assert_eq!(json["lastScanTime"], serde_json::Value::Null);
    assert_eq!(json["scannedUrls"], json!([]));
    assert_eq!(json["metricsEndpoint"], "/metrics");
    assert_eq!(json["scanEndpoint"], "/scan (POST)");
}

// ---------------------------------------------------------------------------
// Test: /status reflects recorded scan state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_reports_scanned_urls() {
    let state = test_state();
    {
        let mut scan_state = state.scan_state.write().await;
        scan_state.last_scan_time = Some(Utc::now());
        scan_state
            .scanned_urls
            .insert("https://example.com/".to_string());
    }

    let app = build_test_app(state);
    let json = body_json(get(app, "/status").await).await;

    assert!(json["lastScanTime"].is_string());
    assert_eq!(json["scannedUrls"], json!(["https://example.com/"]));
}

// ---------------------------------------------------------------------------
// Test: POST /scan validation failures return the guidance payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scan_without_urls_returns_400() {
    let app = build_test_app(test_state());
    let response = post_json(app, "/scan", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Please provide an array of URLs to scan");
    assert!(json["example"]["urls"].is_array());
}

#[tokio::test]
async fn scan_with_empty_url_list_returns_400() {
    let app = build_test_app(test_state());
    let response = post_json(app, "/scan", json!({ "urls": [] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scan_with_non_string_urls_returns_400() {
    let app = build_test_app(test_state());
    let response = post_json(app, "/scan", json!({ "urls": ["https://a.test/", 42] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: POST /scan answers immediately with the started payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scan_with_valid_urls_starts_in_background() {
    let app = build_test_app(test_state());

    // An unroutable URL: the background scan fails and is logged, which is
    // exactly the contract -- the response must not wait on it.
    let response = post_json(app, "/scan", json!({ "urls": ["http://127.0.0.1:1/"] })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Scan started");
    assert_eq!(json["urls"], json!(["http://127.0.0.1:1/"]));
    assert!(json["note"].as_str().unwrap().contains("/metrics"));
}

// ---------------------------------------------------------------------------
// Test: /metrics exposes updated gauges in text format
// ---------------------------------------------------------------------------

#[tokio::test]
async fn metrics_expose_updated_gauges() {
    let state = test_state();
    state.metrics.update(&fixture_scan("https://example.com/"));

    let app = build_test_app(state);
    let response = get(app, "/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_text(response).await;
    assert!(body.contains(
        r#"accessibility_violations_total{severity="critical",url="https://example.com/"} 2"#
    ));
    assert!(body.contains(r#"accessibility_passes_total{url="https://example.com/"} 1"#));
    assert!(body.contains(r#"accessibility_incomplete_total{url="https://example.com/"} 0"#));
    assert!(body.contains(
        r#"accessibility_violations_by_type{impact="critical",url="https://example.com/",violation_id="image-alt"} 2"#
    ));
}
