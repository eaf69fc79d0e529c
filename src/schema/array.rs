//! Array validation.
//!
//! This module provides [`ArrayValidator`], which applies a single item
//! validator to every element with per-index error aggregation.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ChildFailure, ErrorKind, Segment, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};
use super::value_type_name;

/// A validator for array values.
///
/// One item validator is applied independently to every element; there is no
/// positional schema. Validation never stops at the first failing element:
/// each failure is tagged with its 0-based index and all of them are
/// aggregated into one error. An empty input always succeeds with an empty
/// result.
///
/// On success a fresh array of validated elements is returned in input
/// order; the input is never mutated.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::string());
///
/// assert!(schema.validate(&json!(["a", "b"])).is_success());
///
/// let err = schema
///     .validate(&json!(["a", 1, "b"]))
///     .into_result()
///     .unwrap_err();
/// assert!(err.to_string().contains("Item 1"));
/// ```
pub struct ArrayValidator {
    common: Common,
    item: Box<dyn Validate>,
}

impl ArrayValidator {
    /// Creates a new array validator with the given item validator.
    pub fn new(item: impl Validate + 'static) -> Self {
        Self {
            common: Common::default(),
            item: Box::new(item),
        }
    }

    /// Marks this node as optional: a `null` input validates to `null`.
    pub fn optional(mut self) -> Self {
        self.common.optional = true;
        self
    }

    /// Sets a custom message that replaces the text of any failure raised by
    /// this node. Failures bubbling up from the item validator keep their
    /// own text inside the aggregate breakdown.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.common.message = Some(message.into());
        self
    }
}

impl Validate for ArrayValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        let arr = match value.as_array() {
            Some(a) => a,
            None => {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::TypeMismatch,
                    format!("Expected array, got {}", value_type_name(value)),
                ));
            }
        };

        let mut result = Vec::with_capacity(arr.len());
        let mut failures: Vec<ChildFailure> = Vec::new();

        for (index, item) in arr.iter().enumerate() {
            match self.item.validate(item) {
                Validation::Success(v) => result.push(v),
                Validation::Failure(error) => {
                    failures.push(ChildFailure {
                        segment: Segment::Index(index),
                        message: error.message().to_string(),
                    });
                }
            }
        }

        if failures.is_empty() {
            Validation::Success(Value::Array(result))
        } else {
            Validation::Failure(ValidationError::aggregate(
                ErrorKind::ArrayValidationFailed,
                failures,
            ))
        }
    }

    fn common(&self) -> &Common {
        &self.common
    }
}
