//! The shared validator contract.
//!
//! This module provides the [`Validate`] trait that every validator node
//! implements, along with the [`Common`] configuration shared by all node
//! kinds (optionality and custom-message override).

use serde_json::Value;
use stillwater::Validation;

use crate::ValidationResult;

/// Node configuration shared by every validator kind.
///
/// Written only during the builder phase; `validate` reads it but never
/// mutates it, so finished nodes are safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Common {
    pub(crate) optional: bool,
    pub(crate) message: Option<String>,
}

/// The capability every validator node implements.
///
/// `Validate` enables schema polymorphism: any implementor can be nested as
/// an object field or an array item schema. The `Send + Sync` bounds allow
/// finished schema trees to be shared across threads for concurrent
/// read-only validation.
///
/// Implementors supply [`check`](Self::check), the type-specific validation
/// logic, and expose their [`Common`] configuration. The entry point,
/// [`validate`](Self::validate), is provided once here and wraps every
/// check identically:
///
/// 1. a `null` input on an optional node succeeds as `null` immediately,
///    with no constraint evaluated;
/// 2. a failure from `check` has its message replaced wholesale when a
///    custom message is configured;
/// 3. anything else passes through unchanged.
///
/// # Example
///
/// ```rust
/// use scrutiny::{Schema, Validate};
/// use serde_json::json;
///
/// let schema = Schema::number().min(18.0).optional();
///
/// // Optional short-circuits on null before any constraint runs
/// assert!(schema.validate(&json!(null)).is_success());
/// assert!(schema.validate(&json!(12)).is_failure());
/// ```
pub trait Validate: Send + Sync {
    /// The type-specific check, run after the shared optional handling.
    ///
    /// Returns the validated (possibly reconstructed) value, or the node's
    /// own failure. Implementations never apply the custom-message override
    /// themselves; `validate` does that uniformly.
    fn check(&self, value: &Value) -> ValidationResult<Value>;

    /// Returns the node's shared configuration.
    fn common(&self) -> &Common;

    /// Validates a value against this node.
    ///
    /// This is the only externally meaningful operation on a validator.
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        if value.is_null() && self.common().optional {
            return Validation::Success(Value::Null);
        }
        match self.check(value) {
            Validation::Failure(error) => match &self.common().message {
                Some(message) => Validation::Failure(error.override_message(message.clone())),
                None => Validation::Failure(error),
            },
            success => success,
        }
    }

    /// Boxes this node for use inside a structural validator.
    fn boxed(self) -> Box<dyn Validate>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
