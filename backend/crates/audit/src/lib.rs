//! Audit Trail Module
//!
//! Append-only record of who changed what, when, and from where.
//!
//! - `domain/` - audit actions, events, stored entries, repository trait
//! - `recorder` - best-effort writer used by the request handlers
//! - `infra/` - PostgreSQL implementation (`audit_log` table)
//!
//! Audit completeness is best-effort: [`AuditRecorder::record`] never
//! returns an error, so a failed audit write cannot fail or roll back the
//! operation that triggered it.

pub mod domain;
pub mod error;
pub mod infra;
pub mod recorder;

pub use domain::entry::{AuditAction, AuditEvent, AuditLogEntry, snapshot};
pub use domain::repository::AuditLogRepository;
pub use error::{AuditError, AuditResult};
pub use infra::postgres::PgAuditLogRepository;
pub use recorder::AuditRecorder;
