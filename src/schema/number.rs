//! Number validation.
//!
//! This module provides [`NumberValidator`] for validating numeric values
//! with range constraints.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};
use super::value_type_name;

/// A validator for numeric values (integer or float).
///
/// Booleans are rejected with a type mismatch even though they have a
/// numeric representation. Bounds are inclusive and compared as `f64`.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::number().min(0.0).max(120.0);
///
/// assert!(schema.validate(&json!(36)).is_success());
/// assert!(schema.validate(&json!(3.5)).is_success());
/// assert!(schema.validate(&json!(-1)).is_failure());
/// assert!(schema.validate(&json!(true)).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct NumberValidator {
    common: Common,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberValidator {
    /// Creates a new number validator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum value (inclusive), returning the node for chaining.
    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    /// Sets the maximum value (inclusive), returning the node for chaining.
    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    /// Marks this node as optional: a `null` input validates to `null`
    /// without any constraint running.
    pub fn optional(mut self) -> Self {
        self.common.optional = true;
        self
    }

    /// Sets a custom message that replaces the text of any failure raised by
    /// this node.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.common.message = Some(message.into());
        self
    }
}

impl Validate for NumberValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        // Value::Bool is a distinct variant, so as_f64 rejects booleans here
        let n = match value.as_f64() {
            Some(n) => n,
            None => {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::TypeMismatch,
                    format!("Expected number, got {}", value_type_name(value)),
                ));
            }
        };

        if let Some(min) = self.min {
            if n < min {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::BelowMinimum,
                    format!("Number must be at least {}", min),
                ));
            }
        }

        if let Some(max) = self.max {
            if n > max {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::AboveMaximum,
                    format!("Number must be at most {}", max),
                ));
            }
        }

        Validation::Success(value.clone())
    }

    fn common(&self) -> &Common {
        &self.common
    }
}
