// ABOUTME: Nutritional score formula: (calories + protein + fiber) * scale factor
// ABOUTME: Pure single-meal and batch scoring behind the injectable MealScorer trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutritional Score Module
//!
//! The score is the sum of a meal's calories, protein, and fiber multiplied
//! by its scale factor, computed with plain IEEE-754 arithmetic. There is no
//! rounding, clamping, or error path: callers validate input first.

use crate::models::Meal;
use rayon::prelude::*;

/// Maps a meal to its score
///
/// The HTTP layer depends on this trait rather than on the formula, so tests
/// and alternative deployments can inject their own implementation.
pub trait MealScorer: Send + Sync {
    /// Score one meal
    fn score(&self, meal: &Meal) -> f64;

    /// Score a batch, preserving length and order
    fn score_batch(&self, meals: &[Meal]) -> Vec<f64> {
        meals.iter().map(|meal| self.score(meal)).collect()
    }
}

/// The production scorer: the linear formula
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScorer;

impl MealScorer for LinearScorer {
    fn score(&self, meal: &Meal) -> f64 {
        calculate_nutritional_score(meal)
    }

    fn score_batch(&self, meals: &[Meal]) -> Vec<f64> {
        batch_calculate_scores(meals)
    }
}

/// Calculate the nutritional score for a meal
#[must_use]
pub fn calculate_nutritional_score(meal: &Meal) -> f64 {
    (meal.calories + meal.protein + meal.fiber) * meal.scale_factor
}

/// Score every meal in order
#[must_use]
pub fn batch_calculate_scores(meals: &[Meal]) -> Vec<f64> {
    meals.iter().map(calculate_nutritional_score).collect()
}

/// Score every meal on the rayon pool
///
/// Produces exactly the same vector as [`batch_calculate_scores`]; only the
/// benchmark uses it, request handlers stay sequential.
#[must_use]
pub fn batch_calculate_scores_parallel(meals: &[Meal]) -> Vec<f64> {
    meals.par_iter().map(calculate_nutritional_score).collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_calculates_score_for_valid_input() {
        let meal = Meal::new(200.0, 15.0, 5.0, 1.5);
        assert_eq!(calculate_nutritional_score(&meal), 330.0);
    }

    #[test]
    fn test_handles_zero_values() {
        let meal = Meal::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(calculate_nutritional_score(&meal), 0.0);
    }

    #[test]
    fn test_handles_negative_values() {
        let meal = Meal::new(-100.0, -10.0, -5.0, 1.0);
        assert_eq!(calculate_nutritional_score(&meal), -115.0);
    }

    #[test]
    fn test_handles_decimal_values() {
        let meal = Meal::new(200.5, 15.5, 5.5, 1.5);
        assert_eq!(calculate_nutritional_score(&meal), 332.25);
    }

    #[test]
    fn test_zero_scale_factor_zeroes_score() {
        let meal = Meal::new(200.0, 15.0, 5.0, 0.0);
        assert_eq!(calculate_nutritional_score(&meal), 0.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let meals = vec![
            Meal::new(200.0, 15.0, 5.0, 1.5),
            Meal::new(300.0, 20.0, 10.0, 1.2),
            Meal::new(150.0, 10.0, 3.0, 2.0),
        ];

        let scores = batch_calculate_scores(&meals);

        assert_eq!(
            scores,
            vec![
                (200.0 + 15.0 + 5.0) * 1.5,
                (300.0 + 20.0 + 10.0) * 1.2,
                (150.0 + 10.0 + 3.0) * 2.0,
            ]
        );
    }

    #[test]
    fn test_batch_empty_input() {
        assert!(batch_calculate_scores(&[]).is_empty());
        assert!(batch_calculate_scores_parallel(&[]).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let meals: Vec<Meal> = (0..1_000)
            .map(|i| {
                let i = f64::from(i);
                Meal::new(200.0 + i, 10.0 + i / 10.0, 2.0 + i / 100.0, 1.0 + i / 1_000.0)
            })
            .collect();

        assert_eq!(
            batch_calculate_scores_parallel(&meals),
            batch_calculate_scores(&meals)
        );
    }

    #[test]
    fn test_linear_scorer_delegates_to_formula() {
        let meals = [
            Meal::new(200.0, 15.0, 5.0, 1.5),
            Meal::new(100.0, 10.0, 5.0, 1.0),
        ];

        assert_eq!(LinearScorer.score(&meals[0]), 330.0);
        assert_eq!(LinearScorer.score_batch(&meals), vec![330.0, 115.0]);
    }
}
