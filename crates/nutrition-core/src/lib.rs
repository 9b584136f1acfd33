// ABOUTME: Core types and constants for the nutritional score service
// ABOUTME: Foundation crate with error handling, the Meal model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutritional
//! score service. It changes rarely, so the server crate can recompile
//! without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Environment defaults, service names, and error messages
//! - **models**: The `Meal` input record and its JSON validation

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Meal`)
pub mod models;
