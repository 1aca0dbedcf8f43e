//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use studytrack_auth::AuthError;
use studytrack_resources::ResourceError;
use studytrack_store::StoreError;

/// Server error type.
///
/// Every handler failure becomes a JSON `{"error": ...}` body; nothing is
/// retried and nothing is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No authenticated session bound to the request.
    #[error("you must be logged in to access this page")]
    Unauthorized,
    /// Missing or invalid request fields.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// Session layer failure (serialization, store access).
    #[error("session: {0}")]
    Session(String),
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Session(err.to_string())
    }
}

impl AppError {
    /// Map the error to an HTTP status code.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::MissingField(_)) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::Duplicate) => StatusCode::CONFLICT,
            AppError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            AppError::Resource(ResourceError::MissingField(_)) => StatusCode::BAD_REQUEST,
            AppError::Resource(_) => StatusCode::BAD_GATEWAY,
            AppError::Auth(AuthError::Backend(_)) | AppError::Store(_) | AppError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "handler failed: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
