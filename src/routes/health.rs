// ABOUTME: Liveness and readiness checks for the nutritional score service
// ABOUTME: Both report the service name so checks can tell deployments apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `healthy` or `ready`
    pub status: String,
    /// Service reporting the status
    pub service: String,
    /// Crate version
    pub version: String,
    /// RFC 3339 time the check was answered
    pub timestamp: String,
}

impl ServiceStatus {
    fn now(status: &str) -> Self {
        Self {
            status: status.to_owned(),
            service: service_names::NUTRITIONAL_SCORE_SERVER.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create `/health` and `/ready`
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    /// The process is up and answering requests
    async fn handle_health() -> Json<ServiceStatus> {
        Json(ServiceStatus::now("healthy"))
    }

    /// Scoring is stateless, so a live process can always take traffic
    async fn handle_ready() -> Json<ServiceStatus> {
        Json(ServiceStatus::now("ready"))
    }
}
