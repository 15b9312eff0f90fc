//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entry::AuditLogEntry;
use crate::domain::repository::AuditLogRepository;
use crate::error::AuditResult;

/// PostgreSQL-backed audit log (`audit_log` table)
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AuditLogRepository for PgAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> AuditResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_log (
                audit_id,
                user_id,
                action,
                target_table,
                target_id,
                old_value,
                new_value,
                ip_address,
                user_agent,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8::inet, $9, $10)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.action.as_str())
        .bind(&entry.target_table)
        .bind(entry.target_id)
        .bind(entry.old_value.as_ref().map(Json))
        .bind(entry.new_value.as_ref().map(Json))
        .bind(entry.ip.as_deref())
        .bind(entry.user_agent.as_deref())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
