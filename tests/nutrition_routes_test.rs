// ABOUTME: Integration tests for the nutritional score route handlers
// ABOUTME: Exercises validation, scoring, batch ordering, and error payloads through the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{router_with_scorer, test_router, BrokenScorer, CountingScorer};
use nutritional_score::config::environment::ServerConfig;
use nutritional_score::routes::{BatchCalculateResponse, CalculateResponse, ServiceStatus};
use nutritional_score::server::NutritionServer;
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// POST /api/calculate
// ============================================================================

#[tokio::test]
async fn test_calculate_returns_score_and_echoes_input() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1.5 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["score"], 330.0);
    assert_eq!(
        body["input"],
        json!({ "calories": 200.0, "protein": 15.0, "fiber": 5.0, "scaleFactor": 1.5 })
    );
}

#[tokio::test]
async fn test_calculate_echoes_integers_as_equal_numbers() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 7, "protein": 3, "fiber": 1, "scaleFactor": 2 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    let expected_input = [
        ("calories", 7.0),
        ("protein", 3.0),
        ("fiber", 1.0),
        ("scaleFactor", 2.0),
    ];
    for (field, expected) in expected_input {
        assert!(body["input"][field].is_number());
        assert_eq!(body["input"][field].as_f64(), Some(expected));
    }
    assert_eq!(body["score"].as_f64(), Some(22.0));
}

#[tokio::test]
async fn test_calculate_accepts_zero_values() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 0, "protein": 0, "fiber": 0, "scaleFactor": 0 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: CalculateResponse = response.json();
    assert_eq!(body.score, 0.0);
}

#[tokio::test]
async fn test_calculate_accepts_negative_and_fractional_values() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": -100, "protein": 10.5, "fiber": 0.25, "scaleFactor": 2 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: CalculateResponse = response.json();
    assert_eq!(body.score, -178.5);
}

#[tokio::test]
async fn test_calculate_rejects_missing_field() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200, "protein": 15, "fiber": 5 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input. All parameters must be numbers.");
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
    assert!(body.get("score").is_none());
}

#[tokio::test]
async fn test_calculate_rejects_numeric_string() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": "200", "protein": 15, "fiber": 5, "scaleFactor": 1 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input. All parameters must be numbers.");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_calculate_rejects_null_and_boolean() {
    for meal in [
        json!({ "calories": null, "protein": 15, "fiber": 5, "scaleFactor": 1 }),
        json!({ "calories": 200, "protein": true, "fiber": 5, "scaleFactor": 1 }),
    ] {
        AxumTestRequest::post("/api/calculate")
            .json(&meal)
            .send(test_router())
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_calculate_rejects_non_object_body() {
    AxumTestRequest::post("/api/calculate")
        .json(&json!([200, 15, 5, 1.5]))
        .send(test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_scorer() {
    let scorer = Arc::new(CountingScorer::default());

    AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200, "protein": "lots", "fiber": 5, "scaleFactor": 1 }))
        .send(router_with_scorer(scorer.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(scorer.calls(), 0);

    AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1 }))
        .send(router_with_scorer(scorer.clone()))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(scorer.calls(), 1);
}

#[tokio::test]
async fn test_calculate_without_json_content_type_is_client_error() {
    let response = AxumTestRequest::post("/api/calculate")
        .raw(r#"{"calories":200,"protein":15,"fiber":5,"scaleFactor":1.5}"#)
        .send(test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input. All parameters must be numbers.");
}

#[tokio::test]
async fn test_calculate_malformed_json_is_unexpected_failure() {
    let response = AxumTestRequest::post("/api/calculate")
        .raw_json(r#"{"calories": 200,"#)
        .send(test_router())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to calculate nutritional score");
    assert_eq!(body["code"], "SERIALIZATION_ERROR");
}

#[tokio::test]
async fn test_calculate_unreportable_score_is_unexpected_failure() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1.5 }))
        .send(router_with_scorer(Arc::new(BrokenScorer)))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to calculate nutritional score");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = ServerConfig::default();
    config.http.max_request_body_bytes = 32;
    let router = NutritionServer::new(config).router();

    AxumTestRequest::post("/api/calculate")
        .json(&json!({
            "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1.5,
            "note": "this body is well past thirty two bytes"
        }))
        .send(router)
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

// ============================================================================
// POST /api/calculate-batch
// ============================================================================

#[tokio::test]
async fn test_batch_scores_in_input_order() {
    let response = AxumTestRequest::post("/api/calculate-batch")
        .json(&json!({
            "meals": [
                { "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1.5 },
                { "calories": 100, "protein": 10, "fiber": 2, "scaleFactor": 1 },
                { "calories": 0, "protein": 0, "fiber": 0, "scaleFactor": 3 }
            ]
        }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: BatchCalculateResponse = response.json();
    assert_eq!(body.scores, vec![330.0, 112.0, 0.0]);
}

#[tokio::test]
async fn test_batch_empty_array() {
    let response = AxumTestRequest::post("/api/calculate-batch")
        .json(&json!({ "meals": [] }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body, json!({ "scores": [] }));
}

#[tokio::test]
async fn test_batch_rejects_non_array_meals() {
    for body in [
        json!({ "meals": { "calories": 200 } }),
        json!({ "meals": "breakfast" }),
        json!({}),
    ] {
        let response = AxumTestRequest::post("/api/calculate-batch")
            .json(&body)
            .send(test_router())
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert_eq!(error["error"], "Invalid input. Meals must be an array.");
    }
}

#[tokio::test]
async fn test_batch_with_invalid_meal_is_rejected_whole() {
    let scorer = Arc::new(CountingScorer::default());

    let response = AxumTestRequest::post("/api/calculate-batch")
        .json(&json!({
            "meals": [
                { "calories": 200, "protein": 15, "fiber": 5, "scaleFactor": 1.5 },
                { "calories": 100, "protein": 10, "fiber": 2 }
            ]
        }))
        .send(router_with_scorer(scorer.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid input. Meal at index 1: field `scaleFactor` is required."
    );
    assert!(body.get("scores").is_none());
    assert_eq!(scorer.calls(), 0);
}

#[tokio::test]
async fn test_batch_malformed_json_is_unexpected_failure() {
    let response = AxumTestRequest::post("/api/calculate-batch")
        .raw_json("{\"meals\": [")
        .send(test_router())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to calculate batch scores");
}

// ============================================================================
// Index, health, fallback, request ids
// ============================================================================

#[tokio::test]
async fn test_index_lists_endpoints() {
    let response = AxumTestRequest::get("/")
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "MountainKid Nutritional Score Calculator API");
    assert_eq!(body["endpoints"]["calculate"], "/api/calculate");
    assert_eq!(body["endpoints"]["calculate_batch"], "/api/calculate-batch");
}

#[tokio::test]
async fn test_health_and_ready() {
    let health: ServiceStatus = AxumTestRequest::get("/health")
        .send(test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "nutritional-score-server");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

    let ready: ServiceStatus = AxumTestRequest::get("/ready")
        .send(test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.service, "nutritional-score-server");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(test_router())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_wrong_method_is_not_success() {
    let response = AxumTestRequest::get("/api/calculate")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_request_id_is_generated_and_reported_in_errors() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "calories": 200 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let request_id = response
        .header("x-request-id")
        .expect("response should carry a request id")
        .to_owned();
    let body: Value = response.json();
    assert_eq!(body["request_id"], request_id);
}

#[tokio::test]
async fn test_client_request_id_is_propagated() {
    let response = AxumTestRequest::post("/api/calculate")
        .header("x-request-id", "meal-check-1")
        .json(&json!({ "calories": 1, "protein": 1, "fiber": 1, "scaleFactor": 1 }))
        .send(test_router())
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.header("x-request-id"), Some("meal-check-1"));
}
