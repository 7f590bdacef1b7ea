//! Error types for the item checker.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::engine::AdvisorError;

/// Unified error type for request handling.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

impl From<JsonRejection> for CheckerError {
    fn from(rejection: JsonRejection) -> Self {
        CheckerError::BadRequest(rejection.body_text())
    }
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for CheckerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            CheckerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            CheckerError::Advisor(AdvisorError::NotConfigured) => {
                tracing::error!("OpenRouter API key not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "OpenRouter API key not configured".to_string(),
                )
            }
            CheckerError::Advisor(AdvisorError::Timeout) => {
                tracing::warn!("Upstream provider timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "Request to AI service timed out".to_string(),
                )
            }
            CheckerError::Advisor(AdvisorError::Upstream(e)) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %e, "Upstream provider error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "Error communicating with AI service".to_string(),
                )
            }
            CheckerError::Advisor(AdvisorError::MalformedReply(e)) => {
                tracing::error!(error = %e, "Unparseable model reply");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNPARSEABLE_REPLY",
                    "AI service returned an answer that could not be understood".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handler operations.
pub type CheckerResult<T> = Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CheckerError::BadRequest("empty".into()), StatusCode::BAD_REQUEST),
            (AdvisorError::NotConfigured.into(), StatusCode::INTERNAL_SERVER_ERROR),
            (AdvisorError::Timeout.into(), StatusCode::GATEWAY_TIMEOUT),
            (
                AdvisorError::Upstream("boom".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AdvisorError::MalformedReply("junk".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
