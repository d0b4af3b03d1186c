/*
 * Responsibility
 * - app-wide AppError definition
 * - IntoResponse impl (HTTP status / standard JSON envelope)
 * - service-layer errors (revocation lookup, validation) converted uniformly
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::v1::dto::response::ApiEnvelope;
use crate::services::auth::revocation::RevocationError;

/// Fixed user-facing message for the revoked-token rejection.
pub const TOKEN_REVOKED_MESSAGE: &str = "Token has been invalidated (logged out).";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("token has been invalidated")]
    TokenRevoked,
    #[error("revocation store unavailable")]
    RevocationUnavailable,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{resource} not found."))
            }
            AppError::TokenRevoked => {
                (StatusCode::UNAUTHORIZED, TOKEN_REVOKED_MESSAGE.to_string())
            }
            AppError::RevocationUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Token revocation check is unavailable.".to_string(),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        let body = ApiEnvelope::<()>::failure(status.as_u16(), message);

        (status, Json(body)).into_response()
    }
}

impl From<RevocationError> for AppError {
    fn from(_: RevocationError) -> Self {
        // Fail closed: a revocation-store failure must never read as "not revoked".
        AppError::RevocationUnavailable
    }
}
