// ABOUTME: Meal input record with explicit JSON presence and number validation
// ABOUTME: Zero is a valid value; only absent, null, or non-numeric fields are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Nutritional components of a single meal
///
/// No field has an enforced range: negative and fractional values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Energy content in kilocalories
    pub calories: f64,
    /// Protein content in grams
    pub protein: f64,
    /// Fiber content in grams
    pub fiber: f64,
    /// Dimensionless multiplier applied to the summed components
    pub scale_factor: f64,
}

/// Why a JSON value was not accepted as a [`Meal`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealValidationError {
    /// The value was not a JSON object
    #[error("meal must be a JSON object")]
    NotAnObject,
    /// A required field was absent or null
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    /// A field was present but not a JSON number
    #[error("field `{0}` must be a number")]
    NotANumber(&'static str),
}

impl Meal {
    /// Create a meal from its four components
    #[must_use]
    pub const fn new(calories: f64, protein: f64, fiber: f64, scale_factor: f64) -> Self {
        Self {
            calories,
            protein,
            fiber,
            scale_factor,
        }
    }

    /// Validate an untyped JSON value and build a meal from it
    ///
    /// Each field must be present and a JSON number. Strings that look like
    /// numbers (`"200"`) and booleans are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first field that failed validation, in wire order.
    pub fn from_json(value: &Value) -> Result<Self, MealValidationError> {
        let object = value.as_object().ok_or(MealValidationError::NotAnObject)?;

        Ok(Self {
            calories: number_field(object, fields::CALORIES)?,
            protein: number_field(object, fields::PROTEIN)?,
            fiber: number_field(object, fields::FIBER)?,
            scale_factor: number_field(object, fields::SCALE_FACTOR)?,
        })
    }
}

fn number_field(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<f64, MealValidationError> {
    match object.get(name) {
        None | Some(Value::Null) => Err(MealValidationError::MissingField(name)),
        Some(value) => value
            .as_f64()
            .ok_or(MealValidationError::NotANumber(name)),
    }
}
