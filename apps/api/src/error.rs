//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Veloce API                        │
//! │                                                                     │
//! │  Handler                                                            │
//! │  Result<T, ApiError>                                                │
//! │         │                                                           │
//! │         ├── ValidationError   ──► 422 field-level reason            │
//! │         ├── AuthorizationError──► 401 generic denial                │
//! │         ├── ConfigurationError──► 503 "service unavailable"         │
//! │         ├── DeliveryError     ──► 502 "try again later"             │
//! │         ├── NotFound          ──► 404                               │
//! │         └── DbError           ──► 500 generic                       │
//! │                                                                     │
//! │  Diagnostic detail (upstream bodies, SQL errors) goes to tracing    │
//! │  logs only. Response messages stay non-technical.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use veloce_core::ValidationError;
use veloce_db::DbError;

use crate::services::concierge::ConciergeError;
use crate::services::notifier::DispatchError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "name is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (422)
    ValidationError,

    /// Admin passphrase rejected (401)
    AuthorizationError,

    /// Notification channel not configured (503)
    ConfigurationError,

    /// Outbound delivery failed (502)
    DeliveryError,

    /// Database operation failed (500)
    PersistenceError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::AuthorizationError => StatusCode::UNAUTHORIZED,
            ErrorCode::ConfigurationError => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::DeliveryError => StatusCode::BAD_GATEWAY,
            ErrorCode::PersistenceError | ErrorCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an authorization error. Always the same message; the
    /// response never says whether the passphrase was close.
    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::AuthorizationError, "Invalid admin password")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            other => {
                tracing::error!(error = %other, "Database operation failed");
                ApiError::new(ErrorCode::PersistenceError, "Database operation failed")
            }
        }
    }
}

/// Converts validation errors to API errors. Field-level reasons are safe
/// to surface verbatim.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts dispatch errors to API errors.
///
/// A missing credential is an operator problem, not the visitor's; the
/// response says the service is unavailable without naming the credential.
/// A failed delivery suggests retrying since the submission itself was fine.
impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotConfigured => {
                tracing::error!("Notification channel credentials missing");
                ApiError::new(
                    ErrorCode::ConfigurationError,
                    "Booking service is temporarily unavailable",
                )
            }
            DispatchError::Rejected { status, body } => {
                tracing::error!(status, body = %body, "Messaging endpoint rejected dispatch");
                ApiError::new(
                    ErrorCode::DeliveryError,
                    "Could not deliver your request, please try again later",
                )
            }
            DispatchError::Network(reason) => {
                tracing::error!(reason = %reason, "Messaging endpoint unreachable");
                ApiError::new(
                    ErrorCode::DeliveryError,
                    "Could not deliver your request, please try again later",
                )
            }
        }
    }
}

/// Converts concierge errors to API errors, same shape as dispatch:
/// missing configuration is 503, upstream failure is 502.
impl From<ConciergeError> for ApiError {
    fn from(err: ConciergeError) -> Self {
        match err {
            ConciergeError::NotConfigured => {
                tracing::error!("Concierge endpoint credentials missing");
                ApiError::new(
                    ErrorCode::ConfigurationError,
                    "Concierge is temporarily unavailable",
                )
            }
            ConciergeError::Rejected { status, body } => {
                tracing::error!(status, body = %body, "Concierge endpoint rejected request");
                ApiError::new(
                    ErrorCode::DeliveryError,
                    "Concierge could not answer, please try again later",
                )
            }
            ConciergeError::Upstream(reason) => {
                tracing::error!(reason = %reason, "Concierge endpoint unreachable");
                ApiError::new(
                    ErrorCode::DeliveryError,
                    "Concierge could not answer, please try again later",
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
