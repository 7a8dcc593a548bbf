// HTTP surface tests — driving the router directly with tower::oneshot.
//
// Uses the seeded mock backend so responses are deterministic and no
// external tools or APIs are touched.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use periscope::collect::Collector;
use periscope::web::{build_router, AppState};

fn test_router(seed: u64) -> Router {
    build_router(AppState {
        collector: Arc::new(Collector::mock_with_seed(seed)),
    })
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================
// POST /privacy-check
// ============================================================

#[tokio::test]
async fn username_check_returns_score_summary_and_sherlock_key() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "username", "value": "octocat" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert!(json["score"].as_u64().unwrap() <= 100);
    assert!(json["summary"].as_str().unwrap().starts_with("Privacy Risk: "));
    assert!(json["timestamp"].as_str().is_some());
    assert!(json["sherlock"].is_array());
    assert!(json.get("holehe").is_none());
    assert!(json.get("whois").is_none());
}

#[tokio::test]
async fn short_local_part_email_omits_sherlock_key() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "email", "value": "ab@x.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["holehe"].is_array());
    assert!(json.get("sherlock").is_none());
}

#[tokio::test]
async fn longer_local_part_email_populates_both_keys() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "email", "value": "abc@x.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["holehe"].is_array());
    assert!(json["sherlock"].is_array());
}

#[tokio::test]
async fn domain_check_returns_whois_record_and_succeeds() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "domain", "value": "github.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["whois"]["registered"], serde_json::json!(true));
    assert!(json["score"].as_u64().unwrap() >= 20);
}

#[tokio::test]
async fn invalid_email_is_a_client_error_with_the_rule_in_the_message() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "email", "value": "not-an-email" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], serde_json::json!("Invalid email format"));
}

#[tokio::test]
async fn empty_value_is_rejected_for_every_kind() {
    for kind in ["email", "username", "domain"] {
        let response = test_router(1)
            .oneshot(json_request(
                "/privacy-check",
                serde_json::json!({ "type": kind, "value": "  " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            serde_json::json!("Input value cannot be empty")
        );
    }
}

#[tokio::test]
async fn unknown_identifier_kind_is_a_client_error() {
    let response = test_router(1)
        .oneshot(json_request(
            "/privacy-check",
            serde_json::json!({ "type": "phone", "value": "555-0100" }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// ============================================================
// POST /generate-report
// ============================================================

fn report_body(format: &str) -> serde_json::Value {
    serde_json::json!({
        "results": {
            "score": 45,
            "summary": "Privacy Risk: Medium (45/100).",
            "sherlock": ["Github", "Reddit"],
        },
        "format": format,
        "inputType": "username",
        "inputValue": "octocat",
    })
}

#[tokio::test]
async fn html_report_is_served_as_html() {
    let response = test_router(1)
        .oneshot(json_request("/generate-report", report_body("html")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains("<strong>octocat</strong>"));
    assert!(html.contains("45/100"));
    assert!(html.contains("<span class=\"platform\">Github</span>"));
}

#[tokio::test]
async fn pdf_report_degrades_to_the_html_rendering() {
    let html_response = test_router(1)
        .oneshot(json_request("/generate-report", report_body("html")))
        .await
        .unwrap();
    let pdf_response = test_router(1)
        .oneshot(json_request("/generate-report", report_body("pdf")))
        .await
        .unwrap();

    assert_eq!(pdf_response.status(), StatusCode::OK);
    let pdf_content_type = pdf_response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(pdf_content_type.starts_with("text/html"));

    // Same sections and values either way; only the generation timestamp
    // inside the header may differ between the two calls
    let html = body_string(html_response).await;
    let pdf = body_string(pdf_response).await;
    for fragment in [
        "Privacy Exposure Score",
        "45/100",
        "class=\"score risk-medium\"",
        "Username Found On Platforms",
        "Total platforms: 2",
    ] {
        assert!(html.contains(fragment), "html missing {fragment}");
        assert!(pdf.contains(fragment), "pdf missing {fragment}");
    }
}

// ============================================================
// GET /health
// ============================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = test_router(1)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], serde_json::json!("ok"));
}
