// ABOUTME: Test doubles and router builders shared by the HTTP integration tests
// ABOUTME: CountingScorer records calls so tests can prove validation ran first

use axum::Router;
use nutritional_score::config::environment::ServerConfig;
use nutritional_score::intelligence::{calculate_nutritional_score, MealScorer};
use nutritional_score::models::Meal;
use nutritional_score::server::NutritionServer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scorer that delegates to the linear formula and counts invocations
#[derive(Default)]
pub struct CountingScorer {
    calls: AtomicUsize,
}

impl CountingScorer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MealScorer for CountingScorer {
    fn score(&self, meal: &Meal) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        calculate_nutritional_score(meal)
    }
}

/// Scorer that always produces a value that cannot be reported
pub struct BrokenScorer;

impl MealScorer for BrokenScorer {
    fn score(&self, _meal: &Meal) -> f64 {
        f64::NAN
    }
}

/// Full router with default configuration and the linear scorer
pub fn test_router() -> Router {
    NutritionServer::new(ServerConfig::default()).router()
}

/// Full router around an injected scorer
pub fn router_with_scorer(scorer: Arc<dyn MealScorer>) -> Router {
    NutritionServer::with_scorer(ServerConfig::default(), scorer).router()
}
