// ABOUTME: Intelligence module for nutritional scoring and its benchmark
// ABOUTME: Re-exports the scorer trait, the linear formula, and batch helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The scoring formula and everything that exercises it outside HTTP.

/// In-process throughput benchmark over randomly generated meals
pub mod benchmark;

/// Nutritional score formula and the `MealScorer` seam
pub mod nutrition_score;

pub use benchmark::{generate_random_meals, random_meal, run_benchmark, BenchmarkReport};
pub use nutrition_score::{
    batch_calculate_scores, batch_calculate_scores_parallel, calculate_nutritional_score,
    LinearScorer, MealScorer,
};
