//! Comprehensive integration tests for the Tip Pool Engine.
//!
//! This test suite covers the full distribution pipeline through the
//! HTTP API, including:
//! - Proportional rate calculation and rounding
//! - Greedy denomination allocation and inventory depletion
//! - Tie-breaking and processing order
//! - Rounding drift reporting
//! - Permissive pool parsing
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use tip_pool_engine::api::{AppState, create_router};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::default())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(total_pool: Value, workers: Vec<(&str, &str)>, inventory: Value) -> Value {
    let workers: Vec<Value> = workers
        .into_iter()
        .map(|(name, hours)| json!({"name": name, "hours": hours}))
        .collect();
    json!({
        "total_pool": total_pool,
        "workers": workers,
        "inventory": inventory
    })
}

fn full_inventory() -> Value {
    json!({"100": 10, "50": 10, "20": 10, "10": 10, "5": 10, "1": 50})
}

fn assert_rate(result: &Value, expected: &str) {
    let actual = decimal(result["rate"].as_str().unwrap());
    assert_eq!(actual, decimal(expected), "Expected rate {}", expected);
}

fn payout<'a>(result: &'a Value, index: usize) -> &'a Value {
    &result["payouts"].as_array().unwrap()[index]
}

fn bill_count(payout: &Value, denomination: &str) -> u64 {
    payout["bills"]
        .get(denomination)
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

// =============================================================================
// SECTION 1: Rate Calculation
// =============================================================================

#[tokio::test]
async fn test_even_split_of_300_over_two_workers() {
    // 300 pool, two workers at 5 hours each: rate 30/hr, both get
    // exactly 150.
    let router = create_router_for_test();
    let request = create_request(
        json!("300"),
        vec![("alice", "5"), ("bob", "5")],
        full_inventory(),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_rate(&body, "30");
    for i in 0..2 {
        let p = payout(&body, i);
        assert_eq!(decimal(p["exact"].as_str().unwrap()), decimal("150"));
        assert_eq!(p["rounded_target"].as_i64().unwrap(), 150);
        assert_eq!(p["remainder"].as_u64().unwrap(), 0);
    }
    assert_eq!(decimal(body["rounding_drift"].as_str().unwrap()), decimal("0"));
}

#[tokio::test]
async fn test_uneven_hours_split_proportionally() {
    // 100 pool, 3 vs 1 hours: 75 and 25.
    let router = create_router_for_test();
    let request = create_request(
        json!("100"),
        vec![("alice", "3"), ("bob", "1")],
        full_inventory(),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_rate(&body, "25");
    assert_eq!(payout(&body, 0)["rounded_target"].as_i64().unwrap(), 75);
    assert_eq!(payout(&body, 1)["rounded_target"].as_i64().unwrap(), 25);
}

#[tokio::test]
async fn test_half_unit_shares_round_away_from_zero() {
    // 5 over two equal workers gives 2.50 each, which rounds to 3.
    let router = create_router_for_test();
    let request = create_request(
        json!("5"),
        vec![("alice", "1"), ("bob", "1")],
        full_inventory(),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payout(&body, 0)["rounded_target"].as_i64().unwrap(), 3);
    assert_eq!(payout(&body, 1)["rounded_target"].as_i64().unwrap(), 3);
    assert_eq!(decimal(body["rounding_drift"].as_str().unwrap()), decimal("1"));
}

#[tokio::test]
async fn test_rounding_drift_reported_when_total_rounds_down() {
    // 100 over three equal workers: 33 each, 99 total, drift -1.
    let router = create_router_for_test();
    let request = create_request(
        json!("100"),
        vec![("a", "1"), ("b", "1"), ("c", "1")],
        full_inventory(),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(body["rounding_drift"].as_str().unwrap()), decimal("-1"));
}

#[tokio::test]
async fn test_payouts_keep_registration_order() {
    let router = create_router_for_test();
    let request = create_request(
        json!("120"),
        vec![("zoe", "1"), ("abe", "9"), ("mia", "2")],
        full_inventory(),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["payouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["zoe", "abe", "mia"]);
}

// =============================================================================
// SECTION 2: Denomination Allocation
// =============================================================================

#[tokio::test]
async fn test_scarce_large_bill_goes_to_largest_target() {
    // Only one 100 bill; targets 150 and 50. The 150 target takes the
    // bill and both report a 50 remainder.
    let router = create_router_for_test();
    let request = create_request(
        json!("200"),
        vec![("w1", "3"), ("w2", "1")],
        json!({"100": 1, "50": 0, "20": 0, "10": 0, "5": 0, "1": 0}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let w1 = payout(&body, 0);
    let w2 = payout(&body, 1);
    assert_eq!(w1["rounded_target"].as_i64().unwrap(), 150);
    assert_eq!(bill_count(w1, "100"), 1);
    assert_eq!(w1["remainder"].as_u64().unwrap(), 50);
    assert_eq!(w2["rounded_target"].as_i64().unwrap(), 50);
    assert!(w2["bills"].as_object().unwrap().is_empty());
    assert_eq!(w2["remainder"].as_u64().unwrap(), 50);

    for denomination in ["100", "50", "20", "10", "5", "1"] {
        assert_eq!(
            body["final_inventory"]
                .get(denomination)
                .and_then(Value::as_u64)
                .unwrap_or(0),
            0
        );
    }
}

#[tokio::test]
async fn test_tied_targets_preserve_registration_order() {
    // Both workers are owed 100; only one 100 bill exists. The
    // first-registered worker wins the tie.
    let router = create_router_for_test();
    let request = create_request(
        json!("200"),
        vec![("first", "1"), ("second", "1")],
        json!({"100": 1, "50": 2}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bill_count(payout(&body, 0), "100"), 1);
    assert_eq!(bill_count(payout(&body, 1), "50"), 2);
}

#[tokio::test]
async fn test_greedy_uses_largest_bills_first() {
    let router = create_router_for_test();
    let request = create_request(json!("87"), vec![("alice", "1")], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let p = payout(&body, 0);
    assert_eq!(bill_count(p, "50"), 1);
    assert_eq!(bill_count(p, "20"), 1);
    assert_eq!(bill_count(p, "10"), 1);
    assert_eq!(bill_count(p, "5"), 1);
    assert_eq!(bill_count(p, "1"), 2);
    assert_eq!(p["remainder"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_final_inventory_reflects_depletion() {
    let router = create_router_for_test();
    let request = create_request(
        json!("60"),
        vec![("alice", "1")],
        json!({"50": 1, "20": 1, "10": 1, "5": 1, "1": 5}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let final_inventory = &body["final_inventory"];
    assert_eq!(final_inventory["50"].as_u64().unwrap(), 0);
    assert_eq!(final_inventory["10"].as_u64().unwrap(), 0);
    assert_eq!(final_inventory["20"].as_u64().unwrap(), 1);
    assert_eq!(final_inventory["5"].as_u64().unwrap(), 1);
    assert_eq!(final_inventory["1"].as_u64().unwrap(), 5);
}

#[tokio::test]
async fn test_conservation_for_every_worker() {
    let router = create_router_for_test();
    let request = create_request(
        json!("437"),
        vec![("a", "3.5"), ("b", "1.25"), ("c", "7"), ("d", "0.5")],
        json!({"100": 2, "50": 1, "20": 3, "10": 0, "5": 2, "1": 4}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    for p in body["payouts"].as_array().unwrap() {
        let paid: u64 = p["bills"]
            .as_object()
            .unwrap()
            .iter()
            .map(|(d, c)| d.parse::<u64>().unwrap() * c.as_u64().unwrap())
            .sum();
        assert_eq!(
            paid + p["remainder"].as_u64().unwrap(),
            p["rounded_target"].as_i64().unwrap() as u64,
            "conservation violated for {}",
            p["name"]
        );
    }
}

// =============================================================================
// SECTION 3: Session Record
// =============================================================================

#[tokio::test]
async fn test_result_carries_storable_session_snapshot() {
    let router = create_router_for_test();
    let request = create_request(
        json!("300"),
        vec![("alice", "5"), ("bob", "5")],
        json!({"100": 3}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let session = &body["session"];
    assert!(session["id"].as_str().is_some());
    assert!(session["created_at"].as_str().is_some());
    assert_eq!(decimal(session["total_pool"].as_str().unwrap()), decimal("300"));
    assert_eq!(session["workers"].as_array().unwrap().len(), 2);
    // Each 150 target draws a single 100 bill, leaving one in the till;
    // the snapshot keeps the original count.
    assert_eq!(session["inventory"]["100"].as_u64().unwrap(), 3);
    assert_eq!(body["final_inventory"]["100"].as_u64().unwrap(), 1);
}

// =============================================================================
// SECTION 4: Permissive Pool Parsing
// =============================================================================

#[tokio::test]
async fn test_missing_pool_is_treated_as_zero() {
    let router = create_router_for_test();
    let request = json!({
        "workers": [{"name": "alice", "hours": "4"}],
        "inventory": {"100": 1}
    });

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_rate(&body, "0");
    assert_eq!(payout(&body, 0)["rounded_target"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_unparseable_pool_is_treated_as_zero() {
    let router = create_router_for_test();
    let request = create_request(
        json!("not a number"),
        vec![("alice", "4")],
        json!({"100": 1}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_rate(&body, "0");
}

#[tokio::test]
async fn test_numeric_pool_is_accepted() {
    let router = create_router_for_test();
    let request = create_request(json!(250), vec![("alice", "5")], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_rate(&body, "50");
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_empty_worker_list_is_rejected() {
    let router = create_router_for_test();
    let request = create_request(json!("100"), vec![], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "EMPTY_WORKER_LIST");
}

#[tokio::test]
async fn test_zero_hours_worker_is_rejected() {
    let router = create_router_for_test();
    let request = create_request(json!("100"), vec![("alice", "0")], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "INVALID_WORKER");
}

#[tokio::test]
async fn test_empty_worker_name_is_rejected() {
    let router = create_router_for_test();
    let request = create_request(json!("100"), vec![("", "5")], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "INVALID_WORKER");
}

#[tokio::test]
async fn test_negative_pool_yields_negative_target_error() {
    // A negative pool produces negative rounded targets, which cannot be
    // paid in physical cash; the whole pass is rejected.
    let router = create_router_for_test();
    let request = create_request(json!("-100"), vec![("alice", "2")], full_inventory());

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "NEGATIVE_TARGET");
}

#[tokio::test]
async fn test_unknown_denomination_is_rejected() {
    let router = create_router_for_test();
    let request = create_request(
        json!("100"),
        vec![("alice", "2")],
        json!({"100": 1, "2": 5}),
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "INVALID_DENOMINATIONS");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"].as_str().unwrap(), "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_workers_field_is_rejected() {
    let router = create_router_for_test();
    let request = json!({"total_pool": "100", "inventory": {}});

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 6: Determinism
// =============================================================================

#[tokio::test]
async fn test_identical_requests_yield_identical_payouts() {
    let request = create_request(
        json!("437"),
        vec![("a", "3.5"), ("b", "3.5"), ("c", "7")],
        json!({"100": 2, "50": 1, "20": 3, "5": 2, "1": 4}),
    );

    let (_, first) = post_calculate(create_router_for_test(), request.clone()).await;
    let (_, second) = post_calculate(create_router_for_test(), request).await;

    // Session ids and timestamps differ; the numeric outputs must not.
    assert_eq!(first["rate"], second["rate"]);
    assert_eq!(first["rounding_drift"], second["rounding_drift"]);
    assert_eq!(first["payouts"], second["payouts"]);
    assert_eq!(first["final_inventory"], second["final_inventory"]);
}
