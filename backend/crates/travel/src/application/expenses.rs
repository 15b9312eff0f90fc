//! Expense Service

use std::sync::Arc;

use audit::{AuditEvent, AuditLogRepository, AuditRecorder};
use auth::Identity;
use kernel::id::ExpenseId;
use platform::client::ClientInfo;

use crate::application::{Snapshot, tables};
use crate::domain::{Expense, ExpenseDraft, ExpenseRepository};
use crate::error::{TravelError, TravelResult};

pub struct ExpenseService<R, A> {
    repo: Arc<R>,
    audit: AuditRecorder<A>,
    snapshot: Snapshot<Expense>,
}

impl<R, A> ExpenseService<R, A>
where
    R: ExpenseRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, audit: AuditRecorder<A>, snapshot: Snapshot<Expense>) -> Self {
        Self {
            repo,
            audit,
            snapshot,
        }
    }

    pub async fn list(&self, identity: &Identity) -> TravelResult<Vec<Expense>> {
        self.repo.list_expenses(identity.user_id).await
    }

    pub async fn get(&self, identity: &Identity, id: ExpenseId) -> TravelResult<Expense> {
        self.repo
            .find_expense(identity.user_id, id)
            .await?
            .ok_or(TravelError::NotFound("Expense"))
    }

    pub async fn create(
        &self,
        identity: &Identity,
        draft: ExpenseDraft,
        client: ClientInfo,
    ) -> TravelResult<Expense> {
        let expense = draft.into_expense(identity.user_id);
        self.repo.insert_expense(&expense).await?;

        tracing::info!(
            expense_id = %expense.id,
            user_id = %identity.user_id,
            category = %expense.category,
            "Expense created"
        );

        self.audit
            .record(AuditEvent::insert(
                identity.user_id,
                tables::EXPENSES,
                expense.id.into_uuid(),
                (self.snapshot)(&expense),
                client,
            ))
            .await;

        Ok(expense)
    }

    pub async fn update(
        &self,
        identity: &Identity,
        id: ExpenseId,
        draft: ExpenseDraft,
        client: ClientInfo,
    ) -> TravelResult<Expense> {
        let old = self.get(identity, id).await?;
        let updated = draft.apply_to(&old);

        // Row removed between the read and the write
        if !self.repo.update_expense(&updated).await? {
            return Err(TravelError::NotFound("Expense"));
        }

        tracing::info!(expense_id = %id, user_id = %identity.user_id, "Expense updated");

        self.audit
            .record(AuditEvent::update(
                identity.user_id,
                tables::EXPENSES,
                id.into_uuid(),
                (self.snapshot)(&old),
                (self.snapshot)(&updated),
                client,
            ))
            .await;

        Ok(updated)
    }

    pub async fn delete(
        &self,
        identity: &Identity,
        id: ExpenseId,
        client: ClientInfo,
    ) -> TravelResult<()> {
        let old = self.get(identity, id).await?;

        if !self.repo.delete_expense(identity.user_id, id).await? {
            return Err(TravelError::NotFound("Expense"));
        }

        tracing::info!(expense_id = %id, user_id = %identity.user_id, "Expense deleted");

        self.audit
            .record(AuditEvent::delete(
                identity.user_id,
                tables::EXPENSES,
                id.into_uuid(),
                (self.snapshot)(&old),
                client,
            ))
            .await;

        Ok(())
    }
}
