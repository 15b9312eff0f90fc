//! Audit Error Types
//!
//! These never reach an HTTP response; the recorder logs and drops them.

use thiserror::Error;

pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Debug, Error)]
pub enum AuditError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Storage backend rejected the entry for another reason
    #[error("Audit storage unavailable: {0}")]
    Unavailable(String),
}
