// ABOUTME: Core data models shared by the scoring library and the HTTP service
// ABOUTME: Re-exports the Meal record and its validation error

/// Meal input record and JSON validation
pub mod meal;

pub use meal::{Meal, MealValidationError};
