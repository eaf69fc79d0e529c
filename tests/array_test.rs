//! Integration tests for array validation.

use scrutiny::{ErrorKind, Schema, Segment, Validate};
use serde_json::json;

/// Helper to extract the success value from a validation outcome
fn unwrap_success<T, E: std::fmt::Debug>(v: stillwater::Validation<T, E>) -> T {
    v.into_result().unwrap()
}

/// Helper to extract the error value from a validation outcome
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

#[test]
fn test_string_array() {
    let schema = Schema::array(Schema::string());

    let result = unwrap_success(schema.validate(&json!(["hello", "world"])));
    assert_eq!(result, json!(["hello", "world"]));
}

#[test]
fn test_empty_array_is_trivially_valid() {
    let schema = Schema::array(Schema::string());
    assert_eq!(unwrap_success(schema.validate(&json!([]))), json!([]));
}

#[test]
fn test_rejects_non_arrays() {
    let schema = Schema::array(Schema::string());

    let error = unwrap_failure(schema.validate(&json!("not an array")));
    assert_eq!(error.kind(), ErrorKind::TypeMismatch);

    assert!(schema.validate(&json!(123)).is_failure());
    assert!(schema.validate(&json!({})).is_failure());
}

#[test]
fn test_item_failure_carries_index() {
    let schema = Schema::array(Schema::string());

    let error = unwrap_failure(schema.validate(&json!(["a", 1, "b"])));
    assert_eq!(error.kind(), ErrorKind::ArrayValidationFailed);
    assert!(error.to_string().contains("Item 1"));
    assert_eq!(error.children()[0].segment, Segment::Index(1));
}

#[test]
fn test_every_failing_element_reported() {
    let schema = Schema::array(Schema::string());

    let error = unwrap_failure(schema.validate(&json!([1, "ok", 2])));
    assert_eq!(error.children().len(), 2);
    assert_eq!(
        error.to_string(),
        "Array validation failed: Item 0: Expected string, got number; \
         Item 2: Expected string, got number"
    );
}

#[test]
fn test_number_array() {
    let schema = Schema::array(Schema::number());
    let result = unwrap_success(schema.validate(&json!([1, 2, 3.14, -5])));
    assert_eq!(result, json!([1, 2, 3.14, -5]));
}

#[test]
fn test_same_item_validator_for_all_indices() {
    let schema = Schema::array(Schema::number().min(0.0).max(10.0));

    assert!(schema.validate(&json!([0, 5, 10])).is_success());
    // The same bounds apply at every position
    assert!(schema.validate(&json!([0, 11, 5])).is_failure());
    assert!(schema.validate(&json!([-1])).is_failure());
}

#[test]
fn test_array_of_objects() {
    let schema = Schema::array(Schema::object([
        ("id", Schema::number().boxed()),
        ("name", Schema::string().boxed()),
    ]));

    let data = json!([
        {"id": 1, "name": "Alice"},
        {"id": 2, "name": "Bob"}
    ]);
    assert_eq!(unwrap_success(schema.validate(&data)), data);

    let error = unwrap_failure(schema.validate(&json!([
        {"id": 1, "name": "Alice"},
        {"id": "two", "name": "Bob"}
    ])));
    assert!(error.to_string().starts_with("Array validation failed: Item 1:"));
}

#[test]
fn test_optional_array() {
    let schema = Schema::array(Schema::string()).optional();

    assert_eq!(
        unwrap_success(schema.validate(&json!(["hello"]))),
        json!(["hello"])
    );
    assert_eq!(
        unwrap_success(schema.validate(&json!(null))),
        serde_json::Value::Null
    );
}
