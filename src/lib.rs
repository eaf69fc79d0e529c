//! # Scrutiny
//!
//! A composable schema validation library for dynamic values.
//!
//! ## Overview
//!
//! Schemas are trees of validator nodes built through the [`Schema`] factory.
//! Primitive nodes (string, number, boolean, date) check a single value;
//! structural nodes (object, array) recursively delegate to child validators.
//! Structural validation never stops at the first problem: every field and
//! every element is checked, and all failures are reported together in one
//! error with field-name and index attribution.
//!
//! ## Core Types
//!
//! - [`Schema`]: factory for constructing validator nodes
//! - [`Validate`]: the capability every validator node implements
//! - [`ValidationError`]: a single structured failure, possibly aggregating
//!   many per-field or per-index messages
//! - [`ValidationResult`]: the outcome of a `validate` call
//!
//! ## Example
//!
//! ```rust
//! use scrutiny::{Schema, Validate};
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("name", Schema::string().min_length(2).boxed()),
//!     ("age", Schema::number().min(0.0).optional().boxed()),
//! ]);
//!
//! let result = schema.validate(&json!({"name": "Ada", "age": 36}));
//! assert!(result.is_success());
//!
//! // Both problems are reported in a single failure
//! let result = schema.validate(&json!({"name": "A", "age": -1}));
//! assert!(result.is_failure());
//! ```

pub mod error;
pub mod schema;

pub use error::{ChildFailure, ErrorKind, Segment, ValidationError};
pub use schema::{
    ArrayValidator, BooleanValidator, DateValidator, NumberValidator, ObjectValidator, Schema,
    StringValidator, Validate,
};

/// Type alias for validation outcomes.
///
/// Success carries the validated (possibly reconstructed) value; failure
/// carries exactly one [`ValidationError`].
pub type ValidationResult<T> = stillwater::Validation<T, ValidationError>;
