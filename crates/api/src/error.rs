use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use osint_core::error::CoreError;

use crate::response::ErrorResponse;

/// The analysis an error belongs to, used in client-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Sherlock,
    Whois,
    Inspector,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sherlock => "Sherlock",
            Self::Whois => "WHOIS",
            Self::Inspector => "Inspector",
        })
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{success: false, error, details}`
/// bodies. Nothing a single request does should escape as a panic or a
/// non-JSON error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A malformed request with a human-readable message.
    #[error("Bad request: {error}: {details}")]
    BadRequest { error: String, details: String },

    /// A failure while running one of the analyses.
    #[error("Failed to run {kind} analysis: {source}")]
    Analysis {
        kind: AnalysisKind,
        #[source]
        source: CoreError,
    },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn analysis(kind: AnalysisKind, source: impl Into<CoreError>) -> Self {
        Self::Analysis {
            kind,
            source: source.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            error: "Invalid request body".to_string(),
            details: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest { error, details } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(error, details))
            }

            // Missing or invalid subject: the client's fault.
            AppError::Analysis {
                kind,
                source: CoreError::Validation(msg),
            } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(msg, format!("Invalid {kind} request")),
            ),

            AppError::Analysis { kind, source } => {
                tracing::error!(analysis = %kind, error = %source, "Analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(format!("Failed to run {kind} analysis"), source.to_string()),
                )
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "An internal error occurred",
                        "The server could not complete the request",
                    ),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
