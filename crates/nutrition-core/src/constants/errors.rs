// ABOUTME: Client-facing error message constants
// ABOUTME: Shared by validation, route handlers, and tests so wording stays consistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Rejection for a single meal with a missing or non-numeric field
pub const MSG_INVALID_MEAL_INPUT: &str = "Invalid input. All parameters must be numbers.";

/// Rejection for a batch body whose `meals` is not an array
pub const MSG_INVALID_MEALS_ARRAY: &str = "Invalid input. Meals must be an array.";

/// Unexpected failure while scoring one meal
pub const MSG_CALCULATE_FAILED: &str = "Failed to calculate nutritional score";

/// Unexpected failure while scoring a batch
pub const MSG_CALCULATE_BATCH_FAILED: &str = "Failed to calculate batch scores";
