//! API error taxonomy and its mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::entity::EntityKind;
use crate::error::CohortError;
use crate::schema::ValidationErrors;

/// Message returned for every 500; details only go to the log.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    Unauthenticated,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// A validation failure with a request-specific headline.
    pub fn invalid(message: impl Into<String>, errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::invalid("Validation failed", errors)
    }
}

impl From<CohortError> for ApiError {
    fn from(err: CohortError) -> Self {
        match err {
            CohortError::UsernameTaken(username) => {
                ApiError::Conflict(format!("Username already exists: {}", username))
            }
            CohortError::InvalidCredentials => ApiError::Unauthenticated,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation { message, errors } => json!({
                "message": message,
                "errors": errors.errors(),
            }),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "request failed");
                json!({ "message": INTERNAL_MESSAGE })
            }
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
