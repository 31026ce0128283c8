//! Response assertions

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert an error response's status and `message` field
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], message);
    assert_eq!(body["status"], status.as_u16());
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
