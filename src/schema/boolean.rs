//! Boolean validation.
//!
//! This module provides [`BooleanValidator`], which accepts exactly `true`
//! and `false` with no truthy/falsy coercion.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};
use super::value_type_name;

/// A validator for boolean values.
///
/// `1`, `0`, `"true"`, empty strings, and every other non-boolean value are
/// rejected; there are no constraints beyond the type check.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::boolean();
///
/// assert!(schema.validate(&json!(true)).is_success());
/// assert!(schema.validate(&json!(1)).is_failure());
/// assert!(schema.validate(&json!("true")).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct BooleanValidator {
    common: Common,
}

impl BooleanValidator {
    /// Creates a new boolean validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this node as optional: a `null` input validates to `null`.
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

impl Validate for BooleanValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        if value.is_boolean() {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(ValidationError::new(
                ErrorKind::TypeMismatch,
                format!("Expected boolean, got {}", value_type_name(value)),
            ))
        }
    }

    fn common(&self) -> &Common {
        &self.common
    }
}
