// ABOUTME: Main library entry point for the nutritional score service
// ABOUTME: Scoring function, JSON HTTP API, benchmark, and load-test building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutritional Score
//!
//! Computes `(calories + protein + fiber) * scaleFactor` for a meal and
//! serves it over a small JSON HTTP API.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure scoring function behind the `MealScorer` trait
//! - **Routes**: thin axum handlers that validate input and delegate to the scorer
//! - **Server**: `NutritionServer`, an explicit service object built from a
//!   `ServerConfig` and a scorer, started under caller control
//! - **Load test**: an HTTP client that drives `/api/calculate` under concurrency
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutritional_score::config::environment::ServerConfig;
//! use nutritional_score::server::NutritionServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     NutritionServer::new(config).run().await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Scoring algorithms and the in-process benchmark
pub mod intelligence;

/// HTTP load-testing client
pub mod loadtest;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Process memory and CPU sampling for benchmark reports
pub mod resources;

/// HTTP route handlers organized by domain
pub mod routes;

/// Service object that owns the router and the listener
pub mod server;

/// Re-export of the core crate's error types
pub use nutrition_core::errors;

/// Re-export of the core crate's models
pub use nutrition_core::models;

/// Re-export of the core crate's constants
pub use nutrition_core::constants;
