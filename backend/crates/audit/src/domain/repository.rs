//! Repository Traits
//!
//! Interface for audit persistence. Implementation is in infrastructure layer.

use crate::domain::entry::AuditLogEntry;
use crate::error::AuditResult;

/// Audit log repository trait
///
/// Append-only: there is intentionally no update or delete.
#[trait_variant::make(AuditLogRepository: Send)]
pub trait LocalAuditLogRepository {
    /// Persist one entry
    async fn append(&self, entry: &AuditLogEntry) -> AuditResult<()>;
}
