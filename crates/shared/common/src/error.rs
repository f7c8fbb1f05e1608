//! Unified error handling for the HTTP services.
//!
//! Provides a single error type that converts domain errors into Axum HTTP
//! responses with a `{ "error": { "code", "message" } }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types, one per HTTP outcome.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    // External service errors
    #[error("Upstream error: {0}")]
    Upstream(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                "A dependent service could not be reached".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(_) => AppError::Validation(err.to_string()),
            DomainError::NoFieldsToUpdate | DomainError::UserNotFound(_) => {
                AppError::BadRequest(err.to_string())
            }
            DomainError::NotFound(entity) => AppError::NotFound(entity),
            DomainError::TransactionInvalid(_) | DomainError::VersionConflict(_) => {
                AppError::Conflict(err.to_string())
            }
            DomainError::RemoteCallFailed(msg) => AppError::Upstream(msg),
            DomainError::EmptyIdentifier | DomainError::Storage(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructor
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_mapping_statuses() {
        let cases = [
            (DomainError::invalid_input("bad"), StatusCode::BAD_REQUEST),
            (DomainError::NoFieldsToUpdate, StatusCode::BAD_REQUEST),
            (DomainError::user_not_found("u1"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("user"), StatusCode::NOT_FOUND),
            (DomainError::transaction_invalid("done"), StatusCode::CONFLICT),
            (DomainError::version_conflict("stale"), StatusCode::CONFLICT),
            (DomainError::EmptyIdentifier, StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::storage("poisoned"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::remote_call_failed("timeout"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain, status) in cases {
            assert_eq!(AppError::from(domain).status(), status);
        }
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::from(DomainError::storage("lock poisoned"));

        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.user_message().contains("poisoned"));
    }

    #[test]
    fn test_client_errors_keep_message() {
        let err = AppError::from(DomainError::transaction_invalid("sale s1 is already approved"));

        assert_eq!(err.code(), "CONFLICT");
        assert!(err.user_message().contains("already approved"));
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = AppError::from(DomainError::not_found("sale")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "sale not found");
    }
}
