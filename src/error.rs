//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Callers that only care about the user-visible category use
//! [`ServiceError::kind`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "group not found: 3f1c...",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// User-visible error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The addressed group, member or expense does not exist.
    NotFound,
    /// Anything else: bad input, store failures, routing misses.
    RequestFailed,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Request    | 400 / 404 / 405           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Group with the given ID was not found.
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// Member does not exist within the given group.
    #[error("member {member_id} not found in group {group_id}")]
    MemberNotFound {
        /// Owning group.
        group_id: String,
        /// Missing member.
        member_id: String,
    },

    /// Expense does not exist within the given group.
    #[error("expense {expense_id} not found in group {group_id}")]
    ExpenseNotFound {
        /// Owning group.
        group_id: String,
        /// Missing expense.
        expense_id: String,
    },

    /// Request validation or body parsing failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No route matches the request path.
    #[error("not found: {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept this method.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::RouteNotFound(_) => 1004,
            Self::MethodNotAllowed(_) => 1005,
            Self::GroupNotFound(_) => 2001,
            Self::MemberNotFound { .. } => 2002,
            Self::ExpenseNotFound { .. } => 2003,
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::GroupNotFound(_)
            | Self::MemberNotFound { .. }
            | Self::ExpenseNotFound { .. }
            | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the user-visible category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::GroupNotFound(_) | Self::MemberNotFound { .. } | Self::ExpenseNotFound { .. } => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::RequestFailed,
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ServiceError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_share_kind_and_status() {
        let errors = [
            ServiceError::GroupNotFound("g".to_string()),
            ServiceError::MemberNotFound {
                group_id: "g".to_string(),
                member_id: "m".to_string(),
            },
            ServiceError::ExpenseNotFound {
                group_id: "g".to_string(),
                expense_id: "e".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn route_miss_is_not_an_entity_not_found() {
        let err = ServiceError::RouteNotFound("/api/nope".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
    }

    #[test]
    fn persistence_errors_are_server_errors() {
        let err = ServiceError::PersistenceError("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.to_string(), "persistence error: connection refused");
    }

    #[tokio::test]
    async fn response_carries_code_and_message() {
        let response = ServiceError::GroupNotFound("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not json");
        };
        assert_eq!(json["error"]["code"], 2001);
        assert_eq!(json["error"]["message"], "group not found: abc");
        assert!(json["error"].get("details").is_none());
    }
}
