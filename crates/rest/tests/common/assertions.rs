//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response declares a JSON body.
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "Expected application/json, got {}",
        content_type
    );
}

/// Asserts that the response body is `{"error": expected}`.
pub fn assert_error_body(response: &TestResponse, expected: &str) {
    let body: Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({ "error": expected }),
        "Unexpected error body"
    );
}

/// Returns the `id` of every employee in a JSON array body.
pub fn ids_of(response: &TestResponse) -> Vec<u64> {
    let body: Value = response.json();
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|e| e["id"].as_u64().expect("Expected a numeric id"))
        .collect()
}
