//! String validation.
//!
//! This module provides [`StringValidator`] for validating string values with
//! length bounds and regex prefix patterns.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};
use super::value_type_name;

/// A validator for string values.
///
/// Checks run in order: type, minimum length, maximum length, pattern. The
/// first violated check fails the node with a single message. Lengths count
/// Unicode scalar values, not bytes.
///
/// Patterns use prefix semantics: the match must begin at the start of the
/// string, and trailing unmatched input is accepted. Anchor with `$` for a
/// full-string match.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::string()
///     .min_length(3)
///     .max_length(20)
///     .pattern(r"[a-z]+")
///     .unwrap();
///
/// assert!(schema.validate(&json!("hello")).is_success());
/// assert!(schema.validate(&json!("HELLO")).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct StringValidator {
    common: Common,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    /// Creates a new string validator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length (in characters), returning the node for
    /// chaining.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length (in characters), returning the node for
    /// chaining.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Compiles and sets the pattern from a regex source.
    ///
    /// Returns an error if the source is not a valid regex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scrutiny::{Schema, Validate};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().pattern(r"\d{5}").unwrap();
    ///
    /// assert!(schema.validate(&json!("12345")).is_success());
    /// // Prefix semantics: trailing input after the match is accepted
    /// assert!(schema.validate(&json!("12345-6789")).is_success());
    /// assert!(schema.validate(&json!("x12345")).is_failure());
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Sets a precompiled pattern, returning the node for chaining.
    pub fn pattern_regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
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

impl Validate for StringValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::TypeMismatch,
                    format!("Expected string, got {}", value_type_name(value)),
                ));
            }
        };

        if let Some(min) = self.min_length {
            if s.chars().count() < min {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::LengthTooShort,
                    format!("String must be at least {} characters long", min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if s.chars().count() > max {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::LengthTooLong,
                    format!("String must be at most {} characters long", max),
                ));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !matches_prefix(pattern, s) {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::PatternMismatch,
                    "String does not match required pattern",
                ));
            }
        }

        Validation::Success(value.clone())
    }

    fn common(&self) -> &Common {
        &self.common
    }
}

/// True if the pattern matches starting at the beginning of the string.
fn matches_prefix(pattern: &Regex, s: &str) -> bool {
    pattern.find(s).is_some_and(|m| m.start() == 0)
}
