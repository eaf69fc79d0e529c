//! Date validation.
//!
//! This module provides [`DateValidator`], a format-only check on date
//! strings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};

/// Four digits, dash, two digits, dash, two digits at the start of the string.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("hard-coded date pattern"));

/// A validator for date values.
///
/// Strings must start with the `YYYY-MM-DD` shape. The check is deliberately
/// loose: calendar validity is not verified (`"2024-13-99"` passes), trailing
/// content after the shape is accepted, and non-string values pass through
/// unchecked as already date-like.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::date();
///
/// assert!(schema.validate(&json!("2024-06-15")).is_success());
/// assert!(schema.validate(&json!("2024-06-15T10:30:00Z")).is_success());
/// assert!(schema.validate(&json!("15/06/2024")).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct DateValidator {
    common: Common,
}

impl DateValidator {
    /// Creates a new date validator.
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

impl Validate for DateValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        if let Some(s) = value.as_str() {
            if !DATE_SHAPE.is_match(s) {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::InvalidDateFormat,
                    "Date must be in YYYY-MM-DD format",
                ));
            }
        }
        Validation::Success(value.clone())
    }

    fn common(&self) -> &Common {
        &self.common
    }
}
