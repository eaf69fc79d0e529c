//! Integration tests for complete, nested validation scenarios.

use scrutiny::{ObjectValidator, Schema, Validate};
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

fn user_schema() -> ObjectValidator {
    let address = Schema::object([
        ("street", Schema::string().boxed()),
        ("city", Schema::string().boxed()),
        (
            "postal_code",
            Schema::string()
                .pattern(r"^\d{5}$")
                .unwrap()
                .with_message("Postal code must be 5 digits")
                .boxed(),
        ),
        ("country", Schema::string().boxed()),
    ]);

    Schema::object([
        ("id", Schema::string().boxed()),
        ("name", Schema::string().min_length(2).max_length(50).boxed()),
        (
            "email",
            Schema::string()
                .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
                .unwrap()
                .boxed(),
        ),
        ("age", Schema::number().min(0.0).max(120.0).optional().boxed()),
        ("is_active", Schema::boolean().boxed()),
        ("signup_date", Schema::date().optional().boxed()),
        ("tags", Schema::array(Schema::string()).boxed()),
        ("address", address.optional().boxed()),
    ])
}

#[test]
fn test_valid_user_profile() {
    let schema = user_schema();

    let user = json!({
        "id": "user123",
        "name": "John Doe",
        "email": "john@example.com",
        "age": 30,
        "is_active": true,
        "signup_date": "2024-01-15",
        "tags": ["developer", "rust"],
        "address": {
            "street": "123 Main St",
            "city": "Springfield",
            "postal_code": "12345",
            "country": "USA"
        }
    });

    let result = unwrap_success(schema.validate(&user));
    assert_eq!(result["name"], json!("John Doe"));
    assert_eq!(result["age"], json!(30));
    assert_eq!(result["tags"], json!(["developer", "rust"]));
}

#[test]
fn test_optional_fields_absent() {
    let schema = user_schema();

    let user = json!({
        "id": "user123",
        "name": "John Doe",
        "email": "john@example.com",
        "is_active": true,
        "tags": []
    });

    let result = unwrap_success(schema.validate(&user));
    // Absent optional fields appear as null entries in the output
    assert_eq!(result["age"], serde_json::Value::Null);
    assert_eq!(result["address"], serde_json::Value::Null);
}

#[test]
fn test_every_problem_reported_at_once() {
    let schema = user_schema();

    let user = json!({
        "id": "user123",
        "name": "J",
        "email": "not-an-email",
        "age": 200,
        "is_active": "yes",
        "tags": ["ok", 5]
    });

    let error = unwrap_failure(schema.validate(&user));
    let message = error.to_string();

    assert!(message.contains("name"));
    assert!(message.contains("email"));
    assert!(message.contains("age"));
    assert!(message.contains("is_active"));
    assert!(message.contains("tags"));
    assert!(message.contains("Item 1"));
    assert_eq!(error.children().len(), 5);
}

#[test]
fn test_deeply_nested_failure_attribution() {
    let schema = user_schema();

    let user = json!({
        "id": "user123",
        "name": "John Doe",
        "email": "john@example.com",
        "is_active": true,
        "tags": [],
        "address": {
            "street": "123 Main St",
            "city": "Springfield",
            "postal_code": "abc",
            "country": "USA"
        }
    });

    let error = unwrap_failure(schema.validate(&user));
    assert_eq!(
        error.to_string(),
        "Object validation failed: address: Object validation failed: \
         postal_code: Postal code must be 5 digits"
    );
}

#[test]
fn test_validation_is_idempotent() {
    let schema = user_schema();

    let user = json!({
        "id": "user123",
        "name": "John Doe",
        "email": "john@example.com",
        "is_active": true,
        "tags": ["a"],
        "nickname": "JD"
    });

    let first = unwrap_success(schema.validate(&user));
    // Re-validating validated output is a no-op
    let second = unwrap_success(schema.validate(&first));
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_mutated() {
    let schema = Schema::object([("age", Schema::number().optional().boxed())]);

    let input = json!({"extra": true});
    let result = unwrap_success(schema.validate(&input));

    // The output is a fresh structure with the null entry added
    assert_eq!(result, json!({"age": null, "extra": true}));
    assert_eq!(input, json!({"extra": true}));
}
