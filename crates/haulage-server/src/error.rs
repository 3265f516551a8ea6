//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use haulage_app::FleetServiceError;
use haulage_types::{StorageError, VehicleError};

use crate::schemas::{DataResponse, ErrorBody};

pub const DOES_NOT_MATCH_SCHEMA: &str = "payload does not match the input schema";
pub const NOT_FOUND: &str = "the requested resource could not be found";
pub const ALREADY_EXISTS: &str = "attempted to create a resource that already exists";
pub const INTERNAL_ERROR: &str = "something went wrong when trying to perform the request";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("payload does not match the input schema: {0}")]
    DoesNotMatchSchema(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FleetServiceError> for ApiError {
    fn from(err: FleetServiceError) -> Self {
        match err {
            FleetServiceError::Storage(e) => ApiError::Storage(e),
            FleetServiceError::Vehicle(e) => ApiError::Vehicle(e),
            FleetServiceError::Unexpected(msg) => ApiError::Internal(msg),
        }
    }
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DoesNotMatchSchema(_) => StatusCode::BAD_REQUEST,
            Self::Storage(e) => match e {
                StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
                StorageError::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
                StorageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Vehicle(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client
    pub fn public_message(&self) -> String {
        match self {
            Self::DoesNotMatchSchema(_) => DOES_NOT_MATCH_SCHEMA.to_string(),
            Self::Storage(e) => match e {
                StorageError::NotFound { .. } => NOT_FOUND.to_string(),
                StorageError::AlreadyExists { .. } => ALREADY_EXISTS.to_string(),
                StorageError::Internal(_) => INTERNAL_ERROR.to_string(),
            },
            Self::Vehicle(e) => e.to_string(),
            Self::Internal(_) => INTERNAL_ERROR.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, "{}", self);
        } else {
            tracing::warn!(status = %status, "{}", self);
        }

        let body = DataResponse {
            data: ErrorBody {
                error: self.public_message(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
