//! Application error type mapping to HTTP status codes and `detail` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use mergington_types::error::ActivityError;

use crate::http::response::ErrorBody;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Roster operation errors.
    Activity(ActivityError),
    /// Malformed request that never reached the service.
    Validation(String),
    /// No route matched.
    NotFound,
    /// The path matched but not with this method.
    MethodNotAllowed,
}

impl From<ActivityError> for AppError {
    fn from(e: ActivityError) -> Self {
        AppError::Activity(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Activity(ActivityError::NotFound) | AppError::NotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Activity(
                ActivityError::AlreadySignedUp
                | ActivityError::MissingEmail
                | ActivityError::NotRegistered
                | ActivityError::Full,
            ) => StatusCode::BAD_REQUEST,
            AppError::Activity(ActivityError::StorageError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Activity(ActivityError::StorageError(_)) => {
                "Internal Server Error".to_string()
            }
            AppError::Activity(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound => "Not Found".to_string(),
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), detail = %detail, "request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
