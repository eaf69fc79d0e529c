//! Schema definitions for validation.
//!
//! This module provides the validator node types and the [`Schema`] factory,
//! the sole entry point for building schema trees. Each node kind validates
//! one value shape; object and array nodes compose other validators
//! recursively.
//!
//! # Example
//!
//! ```rust
//! use scrutiny::{Schema, Validate};
//! use serde_json::json;
//!
//! let schema = Schema::string().min_length(1).max_length(100);
//!
//! let result = schema.validate(&json!("hello"));
//! assert!(result.is_success());
//! ```

mod array;
mod boolean;
mod date;
mod number;
mod object;
mod string;
mod traits;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
pub use traits::{Common, Validate};

use serde_json::Value;

/// Entry point for creating validator nodes.
///
/// `Schema` provides one factory method per validator kind. Every method
/// returns a freshly constructed, unconfigured node: not optional, no custom
/// message, no constraints. Constraints and modifiers are then added through
/// the node's own chaining methods.
///
/// # Example
///
/// ```rust
/// use scrutiny::Schema;
///
/// let username = Schema::string().min_length(3).max_length(20);
/// let age = Schema::number().min(0.0).optional();
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scrutiny::{Schema, Validate};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_length(5);
    ///
    /// assert!(schema.validate(&json!("hello")).is_success());
    /// assert!(schema.validate(&json!("hi")).is_failure());
    /// ```
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// Creates a new number validator.
    ///
    /// Accepts any integer or float; booleans are strictly rejected even
    /// though they have a numeric representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scrutiny::{Schema, Validate};
    /// use serde_json::json;
    ///
    /// let schema = Schema::number().min(0.0).max(100.0);
    ///
    /// assert!(schema.validate(&json!(50)).is_success());
    /// assert!(schema.validate(&json!(true)).is_failure());
    /// ```
    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    /// Creates a new boolean validator.
    ///
    /// Only `true` and `false` pass; there is no truthy/falsy coercion.
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
    /// ```
    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// Creates a new date validator.
    ///
    /// Strings must start with the `YYYY-MM-DD` shape; non-string values
    /// pass through unchecked.
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
    /// assert!(schema.validate(&json!("June 15")).is_failure());
    /// ```
    pub fn date() -> DateValidator {
        DateValidator::new()
    }

    /// Creates a new object validator from an ordered field schema.
    ///
    /// Field declaration order drives error-report order. Input keys not
    /// named by the schema are passed through to the output unvalidated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scrutiny::{Schema, Validate};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object([
    ///     ("name", Schema::string().boxed()),
    ///     ("age", Schema::number().boxed()),
    /// ]);
    ///
    /// let result = schema.validate(&json!({"name": "Ada", "age": 36}));
    /// assert!(result.is_success());
    /// ```
    pub fn object<K, I>(fields: I) -> ObjectValidator
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Box<dyn Validate>)>,
    {
        ObjectValidator::new(fields)
    }

    /// Creates a new array validator applying one item validator to every
    /// element.
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
    /// assert!(schema.validate(&json!(["a", 1])).is_failure());
    /// ```
    pub fn array(item: impl Validate + 'static) -> ArrayValidator {
        ArrayValidator::new(item)
    }
}

/// Returns the JSON type name for a value, used in type-mismatch messages.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
