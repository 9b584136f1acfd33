// ABOUTME: Route module organization for the nutritional score HTTP endpoints
// ABOUTME: Provides route definitions by domain with thin handlers over the scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the scoring layer.

/// Health check and readiness routes
pub mod health;
/// API index route
pub mod home;
/// Nutritional score routes
pub mod nutrition;

/// Health check route handlers
pub use health::{HealthRoutes, ServiceStatus};
/// API index route handlers
pub use home::HomeRoutes;
/// Nutritional score route handlers
pub use nutrition::{BatchCalculateResponse, CalculateResponse, NutritionRoutes};
