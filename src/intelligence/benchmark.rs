// ABOUTME: In-process throughput benchmark for batch nutritional scoring
// ABOUTME: Generates random meals in realistic ranges and times the parallel batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition_score::batch_calculate_scores_parallel;
use crate::logging::AppLogger;
use crate::models::Meal;
use crate::resources::{ResourceMonitor, ResourceUsage};
use rand::Rng;
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tracing::info;

/// Outcome of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Number of meals scored
    pub meal_count: usize,
    /// Wall-clock time spent scoring, in milliseconds
    pub execution_time_ms: f64,
    /// Mean score over the batch (0 for an empty batch)
    pub average_score: f64,
    /// Process memory and CPU before and after the run
    pub resources: ResourceUsage,
}

/// Generate one meal with calories 200-500, protein 10-30 g, fiber 2-10 g, scale 1-2
#[must_use]
pub fn random_meal<R: Rng + ?Sized>(rng: &mut R) -> Meal {
    Meal::new(
        rng.gen::<f64>().mul_add(300.0, 200.0),
        rng.gen::<f64>().mul_add(20.0, 10.0),
        rng.gen::<f64>().mul_add(8.0, 2.0),
        1.0 + rng.gen::<f64>(),
    )
}

/// Generate `count` random meals
#[must_use]
pub fn generate_random_meals<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Meal> {
    (0..count).map(|_| random_meal(rng)).collect()
}

/// Score `meal_count` random meals and report elapsed time and average score
#[must_use]
pub fn run_benchmark<R: Rng + ?Sized>(meal_count: usize, rng: &mut R) -> BenchmarkReport {
    info!(meal_count, "Starting scoring benchmark");

    let mut monitor = ResourceMonitor::new();
    let before = monitor.sample();

    let meals = generate_random_meals(meal_count, rng);

    let start = Instant::now();
    let scores = batch_calculate_scores_parallel(&meals);
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    let resources = ResourceUsage {
        before,
        after: monitor.sample(),
    };

    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    let tags = json!({ "meals": meal_count });
    AppLogger::log_performance_metric("batch_score_time", execution_time_ms, "ms", Some(&tags));
    AppLogger::log_performance_metric("average_score", average_score, "score", Some(&tags));
    AppLogger::log_performance_metric(
        "memory_delta",
        resources.memory_delta_bytes() as f64,
        "bytes",
        Some(&tags),
    );

    BenchmarkReport {
        meal_count,
        execution_time_ms,
        average_score,
        resources,
    }
}
