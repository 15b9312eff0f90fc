//! Travel Error Types
//!
//! Travel-specific error variants rendered through `kernel::error::AppError`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Travel-specific result type alias
pub type TravelResult<T> = Result<T, TravelError>;

#[derive(Debug, Error)]
pub enum TravelError {
    /// Row absent, or owned by another user
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Request rejected before any store access
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data that cannot be mapped back into the domain
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TravelError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TravelError::NotFound(_) => StatusCode::NOT_FOUND,
            TravelError::Validation(_) => StatusCode::BAD_REQUEST,
            TravelError::Database(_) | TravelError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TravelError::NotFound(_) => ErrorKind::NotFound,
            TravelError::Validation(_) => ErrorKind::BadRequest,
            TravelError::Database(_) | TravelError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Storage details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            TravelError::Database(_) | TravelError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            TravelError::Database(e) => {
                tracing::error!(error = %e, "Travel database error");
            }
            TravelError::Internal(msg) => {
                tracing::error!(message = %msg, "Travel internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Travel request rejected");
            }
        }
    }
}

impl IntoResponse for TravelError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for TravelError {
    fn from(rejection: JsonRejection) -> Self {
        TravelError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for TravelError {
    fn from(rejection: PathRejection) -> Self {
        TravelError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for TravelError {
    fn from(rejection: QueryRejection) -> Self {
        TravelError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TravelError::NotFound("Expense");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_app_error().message(), "Expense not found");
    }

    #[test]
    fn test_database_error_is_generic() {
        let err = TravelError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
