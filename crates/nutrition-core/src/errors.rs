// ABOUTME: Unified error types with standard error codes and HTTP status mapping
// ABOUTME: AppError, ErrorCode, ErrorResponse, and the axum IntoResponse integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the HTTP surface can report is an [`AppError`]. The error
//! code decides the HTTP status; the message is what the client sees in the
//! `error` field of the response body.

use crate::constants::errors::{MSG_CALCULATE_FAILED, MSG_INVALID_MEAL_INPUT};
use crate::models::MealValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    /// Request body failed validation
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    /// A required field was absent
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    /// No route or resource matched the request
    ResourceNotFound = 4000,
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    /// Request body exceeded the configured limit
    PayloadTooLarge = 4013,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    /// Unexpected internal failure
    InternalError = 9000,
    #[serde(rename = "SERIALIZATION_ERROR")]
    /// Request or response body could not be (de)serialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::PayloadTooLarge => 413,
            Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::PayloadTooLarge => "The request body is too large",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the service
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message returned to the client
    pub message: String,
    /// Request ID for correlating logs with responses
    pub request_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Scoring failed with the standard client-facing message
    #[must_use]
    pub fn calculation_failed() -> Self {
        Self::internal(MSG_CALCULATE_FAILED)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
///
/// Serialized flat as `{"error": "...", "code": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Request ID, when one was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            code: error.code,
            request_id: error.request_id,
        }
    }
}

/// A rejected meal always reports the same client-facing message; the code
/// distinguishes an absent field from a wrongly typed one.
impl From<MealValidationError> for AppError {
    fn from(error: MealValidationError) -> Self {
        let code = match error {
            MealValidationError::MissingField(_) => ErrorCode::MissingRequiredField,
            MealValidationError::NotAnObject | MealValidationError::NotANumber(_) => {
                ErrorCode::InvalidInput
            }
        };
        Self::new(code, MSG_INVALID_MEAL_INPUT)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                error.message = %self.message,
                error.source = ?self.source,
                "Request failed"
            );
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::PayloadTooLarge.http_status(), 413);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
        assert_eq!(ErrorCode::SerializationError.http_status(), 500);
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::from(MealValidationError::NotANumber("fiber"))
            .with_request_id("req-123");

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.request_id.as_deref(), Some("req-123"));
        assert!(error.message.starts_with("Invalid input"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::calculation_failed());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Failed to calculate nutritional score");
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn test_missing_field_maps_to_missing_required_field() {
        let error = AppError::from(MealValidationError::MissingField("calories"));

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, MSG_INVALID_MEAL_INPUT);
    }
}
