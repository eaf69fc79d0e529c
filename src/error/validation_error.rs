//! Validation error types.
//!
//! This module provides [`ValidationError`] for validation failures, the
//! [`ErrorKind`] taxonomy, and [`Segment`] for attributing child failures
//! inside aggregate (object/array) errors.

use std::fmt::{self, Display};

use thiserror::Error;

/// The kind of a validation failure.
///
/// Kinds classify *what* went wrong; the human-readable detail lives in the
/// error's message. Aggregate kinds (`ObjectValidationFailed`,
/// `ArrayValidationFailed`) combine one message per failing field or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value's runtime shape does not match the validator's expected kind.
    TypeMismatch,
    /// A string is shorter than the configured minimum length.
    LengthTooShort,
    /// A string is longer than the configured maximum length.
    LengthTooLong,
    /// A string does not start with a match of the configured pattern.
    PatternMismatch,
    /// A number is below the configured minimum value.
    BelowMinimum,
    /// A number is above the configured maximum value.
    AboveMaximum,
    /// A string does not start with the `YYYY-MM-DD` date shape.
    InvalidDateFormat,
    /// One or more fields of an object failed validation.
    ObjectValidationFailed,
    /// One or more elements of an array failed validation.
    ArrayValidationFailed,
}

/// Where a child failure occurred inside a structural validator.
///
/// Attribution is single-level: an object reports the failing field name, an
/// array reports the failing element index. Nested failures carry their own
/// attribution inside the child's message rather than as a deep path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A field of an object (e.g. `email`).
    Field(String),
    /// A 0-based element index of an array.
    Index(usize),
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{}", name),
            Segment::Index(index) => write!(f, "Item {}", index),
        }
    }
}

/// One child failure inside an aggregate error, tagged with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildFailure {
    /// The field name or element index where the failure occurred.
    pub segment: Segment,
    /// The child validator's full failure message.
    pub message: String,
}

impl Display for ChildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.segment, self.message)
    }
}

/// A single validation failure.
///
/// Every failing `validate` call surfaces exactly one `ValidationError`. For
/// primitive validators the message describes the one violated check; for
/// object and array validators it is an aggregate joining one message per
/// failing field or index with `"; "`, and [`children`](Self::children)
/// exposes the per-location breakdown without string parsing.
///
/// # Example
///
/// ```rust
/// use scrutiny::{ErrorKind, Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::string().min_length(5);
/// let err = schema.validate(&json!("hi")).into_result().unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::LengthTooShort);
/// assert_eq!(err.to_string(), "String must be at least 5 characters long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
    children: Vec<ChildFailure>,
}

impl ValidationError {
    /// Creates a new leaf error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            children: Vec::new(),
        }
    }

    /// Creates an aggregate error from per-location child failures.
    ///
    /// The message joins each child as `<location>: <message>` with `"; "`,
    /// prefixed by the heading for the aggregate kind.
    pub fn aggregate(kind: ErrorKind, children: Vec<ChildFailure>) -> Self {
        let heading = match kind {
            ErrorKind::ObjectValidationFailed => "Object validation failed",
            ErrorKind::ArrayValidationFailed => "Array validation failed",
            _ => "Validation failed",
        };
        let joined = children
            .iter()
            .map(ChildFailure::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            kind,
            message: format!("{}: {}", heading, joined),
            children,
        }
    }

    /// Returns the kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the full formatted message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the per-field or per-index breakdown of an aggregate failure.
    ///
    /// Empty for errors raised by primitive validators.
    pub fn children(&self) -> &[ChildFailure] {
        &self.children
    }

    /// Replaces the message text, keeping kind and children intact.
    ///
    /// Used by the custom-message override: the node's own generated text is
    /// discarded wholesale, not appended to.
    pub(crate) fn override_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
