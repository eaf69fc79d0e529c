//! Error types for validation failures.
//!
//! This module provides [`ValidationError`] together with the [`ErrorKind`]
//! taxonomy and the [`Segment`] attribution type used by aggregate failures.

mod validation_error;

pub use validation_error::{ChildFailure, ErrorKind, Segment, ValidationError};
