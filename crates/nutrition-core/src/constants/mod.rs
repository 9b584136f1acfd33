// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment defaults, service names, wire field names, and error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

use std::env;

/// Client-facing error messages
pub mod errors;

/// Default values used when the environment does not override them
pub mod defaults {
    /// Default listen port
    pub const DEFAULT_PORT: u16 = 3000;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default allowed CORS origins
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
    /// Default per-request timeout
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum accepted request body (1 MiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Number of meals generated by the in-process benchmark
    pub const DEFAULT_BENCHMARK_MEALS: usize = 10_000;
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, env};

    /// Get listen port from `PORT` (or `HTTP_PORT`), falling back to the default
    ///
    /// Returns `None` only if a variable is set to something that is not a port.
    #[must_use]
    pub fn port() -> Option<u16> {
        match env::var("PORT").or_else(|_| env::var("HTTP_PORT")) {
            Ok(value) => value.trim().parse().ok(),
            Err(_) => Some(defaults::DEFAULT_PORT),
        }
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::DEFAULT_HOST.to_owned())
    }

    /// Get comma-separated CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::DEFAULT_CORS_ORIGINS.to_owned())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned())
    }

    /// Get deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }
}

/// Service names for structured logging
pub mod service_names {
    /// The HTTP scoring service
    pub const NUTRITIONAL_SCORE_SERVER: &str = "nutritional-score-server";
    /// The HTTP load-testing client
    pub const NUTRITIONAL_SCORE_LOADTEST: &str = "nutritional-score-loadtest";
}

/// JSON field names of the external contract
pub mod fields {
    /// Calories field
    pub const CALORIES: &str = "calories";
    /// Protein field
    pub const PROTEIN: &str = "protein";
    /// Fiber field
    pub const FIBER: &str = "fiber";
    /// Scale factor field
    pub const SCALE_FACTOR: &str = "scaleFactor";
    /// Batch meals field
    pub const MEALS: &str = "meals";
}

/// HTTP paths served by the API
pub mod routes {
    /// Single-meal scoring
    pub const CALCULATE: &str = "/api/calculate";
    /// Batch scoring
    pub const CALCULATE_BATCH: &str = "/api/calculate-batch";
}
