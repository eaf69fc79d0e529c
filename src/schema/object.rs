//! Object validation.
//!
//! This module provides [`ObjectValidator`] for validating keyed structures
//! against an ordered field schema, with per-field error aggregation and
//! pass-through of unknown fields.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{ChildFailure, ErrorKind, Segment, ValidationError};
use crate::ValidationResult;

use super::traits::{Common, Validate};
use super::value_type_name;

/// A validator for object values.
///
/// Every field declared in the schema is validated in declaration order; a
/// field missing from the input is presented to its validator as `null`, so
/// a missing required field surfaces as that validator's own type mismatch.
/// Validation never stops at the first failing field: all per-field failures
/// are aggregated into one error. Input keys not named by the schema are
/// copied into the output verbatim, unvalidated.
///
/// On success a fresh object is returned; the input is never mutated.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::object([
///     ("name", Schema::string().min_length(5).boxed()),
///     ("age", Schema::number().min(18.0).boxed()),
/// ]);
///
/// let err = schema
///     .validate(&json!({"name": "Jo", "age": 15}))
///     .into_result()
///     .unwrap_err();
///
/// // Both failures reported in one message, in schema order
/// assert!(err.to_string().contains("name"));
/// assert!(err.to_string().contains("age"));
/// ```
pub struct ObjectValidator {
    common: Common,
    fields: IndexMap<String, Box<dyn Validate>>,
}

impl ObjectValidator {
    /// Creates a new object validator from an ordered field schema.
    pub fn new<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Box<dyn Validate>)>,
    {
        Self {
            common: Common::default(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Adds a field to the schema, returning the node for chaining.
    ///
    /// Declaration order is preserved; re-adding an existing name replaces
    /// its validator in place.
    pub fn field(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.fields.insert(name.into(), Box::new(validator));
        self
    }

    /// Marks this node as optional: a `null` input validates to `null`.
    pub fn optional(mut self) -> Self {
        self.common.optional = true;
        self
    }

    /// Sets a custom message that replaces the text of any failure raised by
    /// this node. Failures bubbling up from field validators keep their own
    /// text inside the aggregate breakdown.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.common.message = Some(message.into());
        self
    }
}

impl Validate for ObjectValidator {
    fn check(&self, value: &Value) -> ValidationResult<Value> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                return Validation::Failure(ValidationError::new(
                    ErrorKind::TypeMismatch,
                    format!("Expected object, got {}", value_type_name(value)),
                ));
            }
        };

        let mut result = Map::new();
        let mut failures: Vec<ChildFailure> = Vec::new();

        // Schema order, not input order; missing keys become null
        for (name, validator) in &self.fields {
            let field_value = obj.get(name).unwrap_or(&Value::Null);
            match validator.validate(field_value) {
                Validation::Success(v) => {
                    result.insert(name.clone(), v);
                }
                Validation::Failure(error) => {
                    failures.push(ChildFailure {
                        segment: Segment::Field(name.clone()),
                        message: error.message().to_string(),
                    });
                }
            }
        }

        // Unknown input keys pass through unvalidated
        for (key, v) in obj {
            if !self.fields.contains_key(key) {
                result.insert(key.clone(), v.clone());
            }
        }

        if failures.is_empty() {
            Validation::Success(Value::Object(result))
        } else {
            Validation::Failure(ValidationError::aggregate(
                ErrorKind::ObjectValidationFailed,
                failures,
            ))
        }
    }

    fn common(&self) -> &Common {
        &self.common
    }
}
