//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use osint_api::error::{AnalysisKind, AppError};
use osint_core::error::CoreError;
use osint_core::process::ProcessError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: BadRequest maps to 400 with the given message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest {
        error: "Invalid request body".into(),
        details: "expected value at line 1 column 1".into(),
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid request body");
    assert_eq!(json["details"], "expected value at line 1 column 1");
}

// ---------------------------------------------------------------------------
// Test: a validation failure maps to 400 carrying the field message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::analysis(
        AnalysisKind::Sherlock,
        CoreError::Validation("Username is required".into()),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Username is required");
    assert_eq!(json["details"], "Invalid Sherlock request");
}

// ---------------------------------------------------------------------------
// Test: a process timeout maps to 500 naming the analysis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_timeout_returns_500() {
    let err = AppError::analysis(
        AnalysisKind::Inspector,
        ProcessError::Timeout { elapsed_ms: 30_000 },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to run Inspector analysis");
    assert_eq!(json["details"], "Process timed out after 30000ms");
}

// ---------------------------------------------------------------------------
// Test: a lookup failure maps to 500 with the underlying text in details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_error_returns_500() {
    let err = AppError::analysis(
        AnalysisKind::Whois,
        CoreError::Lookup("connection refused".into()),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to run WHOIS analysis");
    assert!(json["details"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

// ---------------------------------------------------------------------------
// Test: InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("index out of bounds in parser".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "An internal error occurred");
    assert!(
        !json.to_string().contains("index out of bounds"),
        "Internal error response must not leak the internal message"
    );
}
