use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use agenda_core::contact::ContactError;
use agenda_core::storage::{repository_error_to_status_code, RepositoryError};

const NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Errors returned by the contact handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Repository failures
/// carry an operation-specific message for the client; the underlying error
/// is only written to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ContactError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Contact not found")]
    NotFound,

    #[error("{message}")]
    Repository {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    /// Wraps a repository error under a client-facing message.
    ///
    /// Meant for `map_err`: `.map_err(ApiError::repository("Failed to list contacts"))`.
    pub fn repository(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Repository { message, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Repository { source, .. } => {
                StatusCode::from_u16(repository_error_to_status_code(source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::Repository { .. } if status == StatusCode::NOT_FOUND => {
                NOT_FOUND_MESSAGE.to_string()
            }
            Self::Repository { message, source } => {
                tracing::error!(error = %source, status = %status, "{message}");
                message.to_string()
            }
            other => {
                tracing::warn!(status = %status, message = %other, "API error");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
