use armory_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::render;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `armory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, page) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "not found");
                    (StatusCode::NOT_FOUND, render::not_found_page())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, render::bad_request_page(msg))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, render::internal_error_page())
                }
            },

            AppError::Database(err) => match err {
                sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, render::not_found_page()),
                other => {
                    tracing::error!(error = %other, "database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, render::internal_error_page())
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, render::bad_request_page(msg)),
        };

        (status, page).into_response()
    }
}
