//! Integration tests for the cinema pricing HTTP service.
//!
//! This test suite covers:
//! - JSON pricing for weekday, weekend and discounted orders
//! - Validation failures (ticket type, quantity, day)
//! - Malformed request bodies
//! - The HTML order form and its submission
//! - Loading the shipped configuration file

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use cinema_pricing::api::{AppState, create_router};
use cinema_pricing::calculation::PricingEngine;
use cinema_pricing::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/pricing.yaml")
        .expect("Failed to load config")
        .into_config();
    AppState::new(PricingEngine::new(config))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["breakdown"][field]
        .as_str()
        .unwrap_or_else(|| panic!("field {} missing in {}", field, result));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn post_price(router: Router, body: String, content_type: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/price");
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    let response = router
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let json: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    (status, json)
}

async fn post_price_json(body: Value) -> (StatusCode, Value) {
    post_price(create_router_for_test(), body.to_string(), Some("application/json")).await
}

async fn post_form(body: &str) -> (StatusCode, String) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let html = String::from_utf8(read_body(response).await).unwrap();
    (status, html)
}

// =============================================================================
// JSON pricing
// =============================================================================

#[tokio::test]
async fn test_adult_weekday_order() {
    let (status, result) =
        post_price_json(json!({ "ticket_type": "dewasa", "quantity": 2, "day": "senin" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown"]["ticket_type"], "dewasa");
    assert_eq!(result["breakdown"]["quantity"], 2);
    assert_amount(&result, "unit_price", "50000");
    assert_amount(&result, "subtotal", "100000");
    assert_amount(&result, "weekend_surcharge", "0");
    assert_amount(&result, "discount", "0");
    assert_amount(&result, "final_total", "100000");
}

#[tokio::test]
async fn test_adult_saturday_order_with_discount() {
    let (status, result) =
        post_price_json(json!({ "ticket_type": "dewasa", "quantity": 3, "day": "sabtu" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "subtotal", "150000");
    assert_amount(&result, "weekend_surcharge", "30000");
    assert_amount(&result, "discount", "18000");
    assert_amount(&result, "final_total", "162000");
}

#[tokio::test]
async fn test_child_sunday_order_below_threshold() {
    let (status, result) =
        post_price_json(json!({ "ticket_type": "anak", "quantity": 1, "day": "Minggu" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "subtotal", "30000");
    assert_amount(&result, "weekend_surcharge", "10000");
    assert_amount(&result, "discount", "0");
    assert_amount(&result, "final_total", "40000");
}

#[tokio::test]
async fn test_quantity_as_string_is_accepted() {
    let (status, result) =
        post_price_json(json!({ "ticket_type": "anak", "quantity": "5", "day": "kamis" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown"]["quantity"], 5);
    assert_amount(&result, "final_total", "135000");
}

#[tokio::test]
async fn test_quote_has_id_timestamp_and_audit_trace() {
    let (status, result) =
        post_price_json(json!({ "ticket_type": "dewasa", "quantity": 3, "day": "sabtu" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(uuid::Uuid::parse_str(result["quote_id"].as_str().unwrap()).is_ok());
    assert!(result["calculated_at"].as_str().is_some());

    let steps = result["audit_trace"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["rule_id"], "order_validation");
    assert_eq!(steps[2]["rule_id"], "weekend_surcharge");
    assert_eq!(steps[2]["output"]["applied"], true);
    assert_eq!(steps[3]["rule_id"], "bulk_discount");
    assert_eq!(steps[4]["output"]["final_total"], "162000");
}

// =============================================================================
// Validation failures
// =============================================================================

async fn assert_rejected(body: Value) {
    let (status, result) = post_price_json(body.clone()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert_eq!(result["message"], "invalid input");
}

#[tokio::test]
async fn test_unknown_ticket_type_rejected() {
    assert_rejected(json!({ "ticket_type": "vip", "quantity": 1, "day": "senin" })).await;
}

#[tokio::test]
async fn test_ticket_type_case_mismatch_rejected() {
    assert_rejected(json!({ "ticket_type": "Dewasa", "quantity": 1, "day": "senin" })).await;
}

#[tokio::test]
async fn test_zero_and_negative_quantity_rejected() {
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": 0, "day": "senin" })).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": -2, "day": "senin" })).await;
}

#[tokio::test]
async fn test_non_numeric_and_fractional_quantity_rejected() {
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": "dua", "day": "senin" })).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": 1.5, "day": "senin" })).await;
}

#[tokio::test]
async fn test_quantity_with_digit_separators_rejected() {
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": "1_000", "day": "senin" })).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": "1__2", "day": "senin" })).await;
}

#[tokio::test]
async fn test_null_and_boolean_quantity_rejected_as_invalid_input() {
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": null, "day": "senin" })).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": true, "day": "senin" })).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": [3], "day": "senin" })).await;
}

#[tokio::test]
async fn test_unknown_day_rejected() {
    assert_rejected(json!({ "ticket_type": "dewasa", "quantity": 2, "day": "funday" })).await;
}

#[tokio::test]
async fn test_missing_fields_rejected_as_invalid_input() {
    assert_rejected(json!({})).await;
    assert_rejected(json!({ "ticket_type": "dewasa", "day": "senin" })).await;
}

// =============================================================================
// Malformed requests
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let (status, result) = post_price(
        create_router_for_test(),
        "{ not json".to_string(),
        Some("application/json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_wrong_field_type_returns_bad_request() {
    let (status, result) = post_price_json(json!({ "ticket_type": 7, "quantity": 1, "day": "senin" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_bad_request() {
    let body = json!({ "ticket_type": "dewasa", "quantity": 1, "day": "senin" }).to_string();
    let (status, result) = post_price(create_router_for_test(), body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// HTML form
// =============================================================================

#[tokio::test]
async fn test_order_page_renders_form() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(read_body(response).await).unwrap();
    assert!(html.contains("<form method=\"POST\" action=\"/\">"));
    assert!(html.contains("Dewasa - Rp 50.000"));
    assert!(html.contains("Anak - Rp 30.000"));
    assert!(html.contains("<title>Pemesanan Tiket Bioskop</title>"));
    assert!(html.contains("<option value=\"senin\">Senin</option>"));
    assert!(!html.contains(" selected>"));
}

#[tokio::test]
async fn test_form_submission_shows_breakdown() {
    let (status, html) = post_form("ticket_type=dewasa&quantity=3&day=sabtu").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>Jenis Tiket: Dewasa</p>"));
    assert!(html.contains("<p>Biaya Weekend: Rp 30.000</p>"));
    assert!(html.contains("<p>Diskon: Rp 18.000</p>"));
    assert!(html.contains("<strong>Total Akhir: Rp 162.000</strong>"));
    assert!(html.contains("<option value=\"sabtu\" selected>Sabtu</option>"));
}

#[tokio::test]
async fn test_form_submission_invalid_shows_error() {
    let (status, html) = post_form("ticket_type=dewasa&quantity=0&day=senin").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("class=\"result error\""));
    assert!(html.contains("Pesanan tidak dapat dihitung."));
    assert!(!html.contains("Total Akhir:"));
}

#[tokio::test]
async fn test_form_submission_missing_fields_shows_error() {
    let (status, html) = post_form("").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("class=\"result error\""));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}
