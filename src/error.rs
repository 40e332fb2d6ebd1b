//! Service error types with HTTP status code mapping.
//!
//! [`RaffleError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

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
///     "code": 1001,
///     "message": "missing required field: code",
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
    /// Numeric error code (see code ranges on [`RaffleError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server          | 500 Internal Server Error    |
/// | 4000–4999 | Wheel-Specific  | 422 Unprocessable Entity     |
#[derive(Debug, thiserror::Error)]
pub enum RaffleError {
    /// A required request field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Commit attempted for a participant that no longer exists.
    #[error("participant not found: {0}")]
    ParticipantNotFound(i64),

    /// A spin is already in flight for this wheel.
    #[error("a spin is already in progress")]
    SpinInProgress,

    /// The wheel has no segments to select from.
    #[error("no participants on the wheel")]
    EmptyWheel,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RaffleError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingField(_) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::ParticipantNotFound(_) => 2001,
            Self::SpinInProgress => 2002,
            Self::EmptyWheel => 4001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ParticipantNotFound(_) => StatusCode::NOT_FOUND,
            Self::SpinInProgress => StatusCode::CONFLICT,
            Self::EmptyWheel => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the diagnostic detail string, if this variant carries one.
    ///
    /// Storage failures expose the underlying driver message here so callers
    /// can log it; the `message` field stays generic.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::PersistenceError(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for RaffleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
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
    fn validation_errors_map_to_400() {
        assert_eq!(
            RaffleError::MissingField("code").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RaffleError::InvalidRequest("bad id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn state_errors_map_to_404_and_409() {
        assert_eq!(
            RaffleError::ParticipantNotFound(42).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RaffleError::SpinInProgress.status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn storage_errors_map_to_500_with_detail() {
        let err = RaffleError::PersistenceError("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.details().as_deref(), Some("connection refused"));
    }

    #[test]
    fn empty_wheel_maps_to_422() {
        assert_eq!(
            RaffleError::EmptyWheel.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(RaffleError::EmptyWheel.error_code(), 4001);
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(RaffleError::MissingField("x").error_code(), 1001);
        assert_eq!(RaffleError::ParticipantNotFound(1).error_code(), 2001);
        assert_eq!(RaffleError::SpinInProgress.error_code(), 2002);
        assert_eq!(
            RaffleError::PersistenceError(String::new()).error_code(),
            3001
        );
    }

    #[test]
    fn details_absent_for_validation() {
        assert!(RaffleError::MissingField("code").details().is_none());
    }
}
