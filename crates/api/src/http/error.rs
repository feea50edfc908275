//! HTTP error handling and response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use routine_domain::constants::MSG_QUOTA_HINT;
use routine_domain::RoutineError;
use serde::{Deserialize, Serialize};

/// Error body of the JSON routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error label (`request`, `decode`, ...)
    pub kind: String,
    /// Human-readable error message
    pub error: String,
    /// Quota hint shown with every failure
    pub hint: String,
}

/// Handler error wrapping the domain error.
#[derive(Debug)]
pub struct ApiError(pub RoutineError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RoutineError::Request(_) | RoutineError::Generation(_) | RoutineError::Network(_) => {
                StatusCode::BAD_GATEWAY
            }
            RoutineError::Decode(_) | RoutineError::Export(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RoutineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RoutineError::Config(_) | RoutineError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<RoutineError> for ApiError {
    fn from(err: RoutineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            kind: self.0.kind_label().to_string(),
            error: self.0.to_string(),
            hint: MSG_QUOTA_HINT.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
