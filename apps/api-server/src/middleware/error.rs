//! Error handling - maps domain and repository failures onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::{ErrorResponse, FieldError};
use thiserror::Error;

/// Application-level error type rendered as a `{"detail": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<FieldError>),

    /// The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Convert a domain error, locating its field violations under `location`
    /// (`body`, `query` or `path`).
    pub fn at(location: &str, err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(violations) => AppError::Validation(
                violations
                    .into_iter()
                    .map(|v| FieldError::new([location, v.field], v.message, v.kind))
                    .collect(),
            ),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(errors) => {
                tracing::warn!(?errors, "Validation error");
                ErrorResponse::fields(errors.clone())
            }
            AppError::Internal(detail) => {
                tracing::error!("An unexpected error occurred: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::at("body", err)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Invalid(err) => err.into(),
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {msg}"))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {msg}")),
            RepoError::Constraint(msg) => {
                AppError::Internal(format!("Database constraint violation: {msg}"))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
