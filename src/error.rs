use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Error taxonomy of the record service.
///
/// `NotFound` is a normal outcome for delete requests (the mutation service
/// reports it through [`crate::service::DeleteOutcome`]); it appears here so
/// the HTTP boundary can map a missing target to a 404. `Unavailable` is the
/// only class that is logged when surfaced.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("entry not found: {0}")]
    NotFound(String),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidIdentifier(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Unavailable(msg) => {
                error!(error = %msg, "record store unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
