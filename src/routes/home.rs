// ABOUTME: API index route listing the available scoring endpoints
// ABOUTME: Also hosts the JSON fallback for unmatched paths

use crate::constants::routes;
use crate::errors::AppError;
use axum::{http::Uri, routing::get, Json, Router};
use serde_json::{json, Value};

/// Index and fallback routes
pub struct HomeRoutes;

impl HomeRoutes {
    /// Create the index route
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/", get(Self::handle_index))
    }

    async fn handle_index() -> Json<Value> {
        Json(json!({
            "message": "MountainKid Nutritional Score Calculator API",
            "endpoints": {
                "calculate": routes::CALCULATE,
                "calculate_batch": routes::CALCULATE_BATCH
            }
        }))
    }

    /// Fallback for paths no route matched
    pub async fn handle_not_found(uri: Uri) -> AppError {
        AppError::not_found(format!("Route {}", uri.path()))
    }
}
