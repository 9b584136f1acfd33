// ABOUTME: Nutritional score route handlers for single-meal and batch scoring
// ABOUTME: Validates JSON bodies explicitly, then delegates to the injected MealScorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutritional score routes
//!
//! Both handlers take the body as untyped JSON so that validation failures
//! produce this API's own `400` payload rather than the framework's default
//! rejection. A request is either rejected before any scoring happens or
//! fully scored; there are no partial results.
//!
//! A batch is rejected as a whole if any one meal is invalid. The error
//! names the index of the first offending meal.

use crate::constants::errors::{
    MSG_CALCULATE_BATCH_FAILED, MSG_CALCULATE_FAILED, MSG_INVALID_MEALS_ARRAY,
    MSG_INVALID_MEAL_INPUT,
};
use crate::constants::{fields, routes};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::MealScorer;
use crate::middleware::request_id_from_headers;
use crate::models::Meal;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Successful single-meal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// The validated input, echoed back
    ///
    /// Fields are re-serialized from `f64`, so an integer such as `200`
    /// comes back as the numerically equal `200.0`.
    pub input: Meal,
    /// The computed score
    pub score: f64,
}

/// Successful batch response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculateResponse {
    /// One score per input meal, in input order
    pub scores: Vec<f64>,
}

/// Nutritional score routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the scoring routes around the given scorer
    #[must_use]
    pub fn routes(scorer: Arc<dyn MealScorer>) -> Router {
        Router::new()
            .route(routes::CALCULATE, post(Self::handle_calculate))
            .route(routes::CALCULATE_BATCH, post(Self::handle_calculate_batch))
            .with_state(scorer)
    }

    /// Handle `POST /api/calculate`
    ///
    /// Responds with `{input, score}` where `input` is the validated meal
    /// as numbers, not the raw request text.
    async fn handle_calculate(
        State(scorer): State<Arc<dyn MealScorer>>,
        headers: HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id_from_headers(&headers);

        Self::calculate(scorer.as_ref(), body)
            .map(|response| (StatusCode::OK, Json(response)).into_response())
            .map_err(|e| attach_request_id(e, request_id))
    }

    /// Handle `POST /api/calculate-batch`
    async fn handle_calculate_batch(
        State(scorer): State<Arc<dyn MealScorer>>,
        headers: HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id_from_headers(&headers);

        Self::calculate_batch(scorer.as_ref(), body)
            .map(|response| (StatusCode::OK, Json(response)).into_response())
            .map_err(|e| attach_request_id(e, request_id))
    }

    fn calculate(
        scorer: &dyn MealScorer,
        body: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<CalculateResponse> {
        let Json(value) = body.map_err(|rejection| {
            map_json_rejection(rejection, MSG_INVALID_MEAL_INPUT, MSG_CALCULATE_FAILED)
        })?;

        let meal = Meal::from_json(&value).map_err(|e| {
            warn!(reason = %e, "Rejected meal");
            AppError::from(e)
        })?;

        let score = scorer.score(&meal);
        if !score.is_finite() {
            return Err(AppError::calculation_failed());
        }

        debug!(score, "Calculated nutritional score");
        Ok(CalculateResponse { input: meal, score })
    }

    fn calculate_batch(
        scorer: &dyn MealScorer,
        body: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<BatchCalculateResponse> {
        let Json(value) = body.map_err(|rejection| {
            map_json_rejection(rejection, MSG_INVALID_MEALS_ARRAY, MSG_CALCULATE_BATCH_FAILED)
        })?;

        let meals = parse_meals(&value)?;
        let scores = scorer.score_batch(&meals);

        if scores.len() != meals.len() || scores.iter().any(|score| !score.is_finite()) {
            return Err(AppError::internal(MSG_CALCULATE_BATCH_FAILED));
        }

        debug!(meal_count = meals.len(), "Calculated batch scores");
        Ok(BatchCalculateResponse { scores })
    }
}

/// Validate a batch body: `meals` must be an array and every element a valid meal
fn parse_meals(body: &Value) -> AppResult<Vec<Meal>> {
    let Some(elements) = body.get(fields::MEALS).and_then(Value::as_array) else {
        warn!("Rejected batch without a meals array");
        return Err(AppError::invalid_input(MSG_INVALID_MEALS_ARRAY));
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Meal::from_json(element).map_err(|e| {
                warn!(index, reason = %e, "Rejected batch meal");
                let message = format!("Invalid input. Meal at index {index}: {e}.");
                AppError::new(AppError::from(e).code, message)
            })
        })
        .collect()
}

/// Translate a body extraction failure
///
/// A request without a JSON content type carries no usable fields, which is a
/// client error. Oversized bodies keep their `413`. Anything else (a body that
/// is not parseable JSON) is reported as an unexpected failure.
fn map_json_rejection(
    rejection: JsonRejection,
    invalid_message: &str,
    failure_message: &str,
) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            warn!("Rejected request without a JSON content type");
            AppError::invalid_input(invalid_message)
        }
        rejection if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized request body");
            AppError::new(ErrorCode::PayloadTooLarge, rejection.body_text())
        }
        rejection => AppError::serialization(failure_message).with_source(rejection),
    }
}

fn attach_request_id(error: AppError, request_id: Option<String>) -> AppError {
    match request_id {
        Some(id) => error.with_request_id(id),
        None => error,
    }
}
