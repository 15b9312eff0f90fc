//! Journey Service

use std::sync::Arc;

use audit::{AuditEvent, AuditLogRepository, AuditRecorder};
use auth::Identity;
use kernel::id::JourneyId;
use platform::client::ClientInfo;

use crate::application::{Snapshot, tables};
use crate::domain::{Journey, JourneyDraft, JourneyRepository};
use crate::error::{TravelError, TravelResult};

pub struct JourneyService<R, A> {
    repo: Arc<R>,
    audit: AuditRecorder<A>,
    snapshot: Snapshot<Journey>,
}

impl<R, A> JourneyService<R, A>
where
    R: JourneyRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, audit: AuditRecorder<A>, snapshot: Snapshot<Journey>) -> Self {
        Self {
            repo,
            audit,
            snapshot,
        }
    }

    pub async fn list(&self, identity: &Identity) -> TravelResult<Vec<Journey>> {
        self.repo.list_journeys(identity.user_id).await
    }

    pub async fn get(&self, identity: &Identity, id: JourneyId) -> TravelResult<Journey> {
        self.repo
            .find_journey(identity.user_id, id)
            .await?
            .ok_or(TravelError::NotFound("Journey"))
    }

    pub async fn create(
        &self,
        identity: &Identity,
        draft: JourneyDraft,
        client: ClientInfo,
    ) -> TravelResult<Journey> {
        let journey = draft.into_journey(identity.user_id);
        self.repo.insert_journey(&journey).await?;

        tracing::info!(
            journey_id = %journey.id,
            user_id = %identity.user_id,
            "Journey created"
        );

        self.audit
            .record(AuditEvent::insert(
                identity.user_id,
                tables::JOURNEYS,
                journey.id.into_uuid(),
                (self.snapshot)(&journey),
                client,
            ))
            .await;

        Ok(journey)
    }

    pub async fn delete(
        &self,
        identity: &Identity,
        id: JourneyId,
        client: ClientInfo,
    ) -> TravelResult<()> {
        let old = self.get(identity, id).await?;

        if !self.repo.delete_journey(identity.user_id, id).await? {
            return Err(TravelError::NotFound("Journey"));
        }

        tracing::info!(journey_id = %id, user_id = %identity.user_id, "Journey deleted");

        self.audit
            .record(AuditEvent::delete(
                identity.user_id,
                tables::JOURNEYS,
                id.into_uuid(),
                (self.snapshot)(&old),
                client,
            ))
            .await;

        Ok(())
    }
}
