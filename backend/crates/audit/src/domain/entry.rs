//! Audit Entry
//!
//! [`AuditEvent`] is what a handler hands to the recorder; [`AuditLogEntry`]
//! is the stored, timestamped row.

use chrono::{DateTime, Utc};
use kernel::id::{AuditEntryId, UserId};
use platform::client::ClientInfo;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Kind of change recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
    Login,
}

impl AuditAction {
    /// Value stored in `audit_log.action`
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Insert => "INSERT",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Login => "LOGIN",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured audit event produced by a successful mutating operation.
///
/// Use the constructors so that each action carries the snapshots it is
/// supposed to carry: INSERT has only a new value, DELETE only an old one,
/// UPDATE both, LOGIN neither.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub user_id: UserId,
    pub action: AuditAction,
    pub target_table: &'static str,
    pub target_id: Option<Uuid>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub client: ClientInfo,
}

impl AuditEvent {
    pub fn insert(
        user_id: UserId,
        target_table: &'static str,
        target_id: Uuid,
        new_value: Option<Value>,
        client: ClientInfo,
    ) -> Self {
        Self {
            user_id,
            action: AuditAction::Insert,
            target_table,
            target_id: Some(target_id),
            old_value: None,
            new_value,
            client,
        }
    }

    pub fn update(
        user_id: UserId,
        target_table: &'static str,
        target_id: Uuid,
        old_value: Option<Value>,
        new_value: Option<Value>,
        client: ClientInfo,
    ) -> Self {
        Self {
            user_id,
            action: AuditAction::Update,
            target_table,
            target_id: Some(target_id),
            old_value,
            new_value,
            client,
        }
    }

    pub fn delete(
        user_id: UserId,
        target_table: &'static str,
        target_id: Uuid,
        old_value: Option<Value>,
        client: ClientInfo,
    ) -> Self {
        Self {
            user_id,
            action: AuditAction::Delete,
            target_table,
            target_id: Some(target_id),
            old_value,
            new_value: None,
            client,
        }
    }

    pub fn login(user_id: UserId, client: ClientInfo) -> Self {
        Self {
            user_id,
            action: AuditAction::Login,
            target_table: "users",
            target_id: Some(user_id.into_uuid()),
            old_value: None,
            new_value: None,
            client,
        }
    }
}

/// Row of the `audit_log` table. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub id: AuditEntryId,
    pub user_id: UserId,
    pub action: AuditAction,
    pub target_table: String,
    pub target_id: Option<Uuid>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn from_event(event: AuditEvent) -> Self {
        Self {
            id: AuditEntryId::new(),
            user_id: event.user_id,
            action: event.action,
            target_table: event.target_table.to_string(),
            target_id: event.target_id,
            old_value: event.old_value,
            new_value: event.new_value,
            ip: event.client.ip_string(),
            user_agent: event.client.user_agent,
            created_at: Utc::now(),
        }
    }
}

/// Serialize an entity into an opaque snapshot.
///
/// Serialization failure drops the snapshot (with a warning) rather than
/// the audit entry.
pub fn snapshot<T: Serialize>(value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize audit snapshot");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ClientInfo {
        ClientInfo::new(Some("203.0.113.7".parse().unwrap()), Some("curl/8.5".into()))
    }

    #[test]
    fn test_action_strings() {
        assert_eq!(AuditAction::Insert.as_str(), "INSERT");
        assert_eq!(AuditAction::Update.to_string(), "UPDATE");
        assert_eq!(AuditAction::Delete.as_str(), "DELETE");
        assert_eq!(
            serde_json::to_string(&AuditAction::Login).unwrap(),
            "\"LOGIN\""
        );
    }

    #[test]
    fn test_insert_carries_only_new_value() {
        let target = Uuid::new_v4();
        let event = AuditEvent::insert(
            UserId::new(),
            "expenses",
            target,
            Some(json!({"amount": 35.5})),
            client(),
        );
        assert_eq!(event.action, AuditAction::Insert);
        assert_eq!(event.target_id, Some(target));
        assert!(event.old_value.is_none());
        assert!(event.new_value.is_some());
    }

    #[test]
    fn test_delete_carries_only_old_value() {
        let event = AuditEvent::delete(
            UserId::new(),
            "wishlist",
            Uuid::new_v4(),
            Some(json!({"location": "Kyoto"})),
            client(),
        );
        assert!(event.old_value.is_some());
        assert!(event.new_value.is_none());
    }

    #[test]
    fn test_login_targets_user_row() {
        let user_id = UserId::new();
        let event = AuditEvent::login(user_id, ClientInfo::default());
        assert_eq!(event.target_table, "users");
        assert_eq!(event.target_id, Some(user_id.into_uuid()));
        assert!(event.old_value.is_none() && event.new_value.is_none());
    }

    #[test]
    fn test_entry_from_event_copies_request_metadata() {
        let user_id = UserId::new();
        let entry = AuditLogEntry::from_event(AuditEvent::login(user_id, client()));
        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.action, AuditAction::Login);
        assert_eq!(entry.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.5"));
    }

    #[test]
    fn test_snapshot_of_struct() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Item {
            planned_date: &'static str,
        }
        let value = snapshot(&Item {
            planned_date: "2025-04-01",
        })
        .unwrap();
        assert_eq!(value, json!({"plannedDate": "2025-04-01"}));
    }
}
