// Error classification and HTTP mapping tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use proptest::prelude::*;
use social_architect::error::ArchitectError;

#[test]
fn test_forbidden_is_invalid_key_or_quota() {
    let err = ArchitectError::classify_upstream(
        "HTTP 403 Forbidden: PERMISSION_DENIED: Method doesn't allow unregistered callers.",
    );
    assert!(matches!(err, ArchitectError::InvalidKeyOrQuota));
    assert_eq!(
        err.to_string(),
        "API Key Invalid or Quota Exceeded. Please check your settings."
    );
}

#[test]
fn test_quota_exhaustion_is_invalid_key_or_quota() {
    for detail in [
        "HTTP 429 Too Many Requests: RESOURCE_EXHAUSTED: Quota exceeded",
        "RESOURCE_EXHAUSTED",
    ] {
        assert!(matches!(
            ArchitectError::classify_upstream(detail),
            ArchitectError::InvalidKeyOrQuota
        ));
    }
}

#[test]
fn test_bad_request_classification() {
    let err = ArchitectError::classify_upstream("HTTP 400 Bad Request: INVALID_ARGUMENT: too long");
    assert!(matches!(err, ArchitectError::BadRequest));
    assert!(err.to_string().starts_with("Bad Request:"));
}

#[test]
fn test_generic_failure_keeps_detail() {
    let err = ArchitectError::classify_upstream("HTTP 500 Internal Server Error: INTERNAL: boom");
    assert_eq!(
        err.to_string(),
        "Failed to generate post. HTTP 500 Internal Server Error: INTERNAL: boom"
    );

    let err = ArchitectError::classify_upstream("");
    assert_eq!(err.to_string(), "Failed to generate post. Please try again.");
}

#[test]
fn test_missing_api_key_message() {
    assert_eq!(
        ArchitectError::MissingApiKey.to_string(),
        "API Key is missing. Please check your settings or environment configuration."
    );
}

#[test]
fn test_status_codes() {
    let cases = vec![
        (ArchitectError::MissingApiKey, StatusCode::UNAUTHORIZED),
        (ArchitectError::InvalidKeyOrQuota, StatusCode::UNAUTHORIZED),
        (ArchitectError::BadRequest, StatusCode::BAD_REQUEST),
        (ArchitectError::InvalidRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (ArchitectError::Busy, StatusCode::CONFLICT),
        (ArchitectError::GenerationFailed("x".to_string()), StatusCode::BAD_GATEWAY),
        (ArchitectError::Config("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        (ArchitectError::Internal("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let display = error.to_string();
        assert_eq!(error.into_response().status(), expected, "{}", display);
    }
}

proptest! {
    #[test]
    fn prop_any_403_detail_is_classified(prefix in "[a-zA-Z :]{0,20}", suffix in "[a-zA-Z :]{0,20}") {
        let detail = format!("{}403{}", prefix, suffix);
        prop_assert!(matches!(
            ArchitectError::classify_upstream(&detail),
            ArchitectError::InvalidKeyOrQuota
        ));
    }
}
