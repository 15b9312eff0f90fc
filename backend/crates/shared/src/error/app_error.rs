//! Application Error
//!
//! [`AppError`] is the rendered form of every domain error.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// Caller-facing error: a kind, a message and an optional next step.
///
/// `AuthError` and `TravelError` convert into this right before the
/// response is written, so every error body has the same shape. The
/// message must never carry storage details.
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::bad_request("priority must be one of 0, 25, 50, 75, 100")
///     .with_action("Pick a priority from the slider");
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Hint rendered as the Problem Details `action` member.
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_drives_status() {
        let err = AppError::new(ErrorKind::Conflict, "User name already taken");
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "User name already taken");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_action_is_not_part_of_display() {
        let err = AppError::not_found("Expense not found").with_action("Refresh the list");
        assert_eq!(err.to_string(), "Not Found: Expense not found");
        assert_eq!(err.action(), Some("Refresh the list"));
    }
}
