//! Audit Recorder
//!
//! Best-effort writer for the audit trail. `record` returns `()`; an audit
//! failure is logged here and never reaches the caller.

use std::sync::Arc;

use crate::domain::entry::{AuditEvent, AuditLogEntry};
use crate::domain::repository::AuditLogRepository;

pub struct AuditRecorder<R> {
    repo: Arc<R>,
}

impl<R> Clone for AuditRecorder<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> AuditRecorder<R>
where
    R: AuditLogRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist one event; failures are logged and swallowed.
    pub async fn record(&self, event: AuditEvent) {
        let entry = AuditLogEntry::from_event(event);

        match self.repo.append(&entry).await {
            Ok(()) => {
                tracing::info!(
                    action = %entry.action,
                    target_table = %entry.target_table,
                    target_id = ?entry.target_id,
                    user_id = %entry.user_id,
                    "Audit log recorded"
                );
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    action = %entry.action,
                    target_table = %entry.target_table,
                    user_id = %entry.user_id,
                    "Failed to record audit log"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::AuditAction;
    use crate::error::{AuditError, AuditResult};
    use kernel::id::UserId;
    use platform::client::ClientInfo;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MemoryLog {
        entries: Mutex<Vec<AuditLogEntry>>,
    }

    impl AuditLogRepository for MemoryLog {
        async fn append(&self, entry: &AuditLogEntry) -> AuditResult<()> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }
    }

    struct BrokenLog;

    impl AuditLogRepository for BrokenLog {
        async fn append(&self, _entry: &AuditLogEntry) -> AuditResult<()> {
            Err(AuditError::Unavailable("disk full".into()))
        }
    }

    #[tokio::test]
    async fn test_record_appends_one_entry() {
        let log = Arc::new(MemoryLog::default());
        let recorder = AuditRecorder::new(log.clone());
        let target = Uuid::new_v4();

        recorder
            .record(AuditEvent::delete(
                UserId::new(),
                "travel_footprints",
                target,
                None,
                ClientInfo::default(),
            ))
            .await;

        let entries = log.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Delete);
        assert_eq!(entries[0].target_table, "travel_footprints");
        assert_eq!(entries[0].target_id, Some(target));
    }

    #[tokio::test]
    async fn test_record_swallows_storage_failure() {
        let recorder = AuditRecorder::new(Arc::new(BrokenLog));
        // Completing without panicking is the whole contract.
        recorder
            .record(AuditEvent::login(UserId::new(), ClientInfo::default()))
            .await;
    }
}
