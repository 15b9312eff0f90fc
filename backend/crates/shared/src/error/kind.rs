//! Error Kind
//!
//! [`ErrorKind`] is the closed set of failure classes the API reports.

use serde::Serialize;

/// Failure class of an [`AppError`](super::app_error::AppError).
///
/// Domain crates pick one of these for every variant of their own error
/// enum; the kind alone decides the HTTP status and the Problem Details
/// `title`.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
/// assert_eq!(ErrorKind::Forbidden.as_str(), "Forbidden");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Body, path or query failed validation
    BadRequest,
    /// No bearer token, or wrong user name / password
    Unauthorized,
    /// Bearer token present but not valid
    Forbidden,
    /// Missing row, including rows owned by another user
    NotFound,
    /// User name already registered
    Conflict,
    /// Storage failure or bug; details stay in the logs
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase for [`status_code`](Self::status_code).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
