//! Wishlist Service

use std::sync::Arc;

use audit::{AuditEvent, AuditLogRepository, AuditRecorder};
use auth::Identity;
use kernel::id::WishlistItemId;
use platform::client::ClientInfo;

use crate::application::{Snapshot, tables};
use crate::domain::{WishlistDraft, WishlistItem, WishlistRepository};
use crate::error::{TravelError, TravelResult};

pub struct WishlistService<R, A> {
    repo: Arc<R>,
    audit: AuditRecorder<A>,
    snapshot: Snapshot<WishlistItem>,
}

impl<R, A> WishlistService<R, A>
where
    R: WishlistRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    pub fn new(
        repo: Arc<R>,
        audit: AuditRecorder<A>,
        snapshot: Snapshot<WishlistItem>,
    ) -> Self {
        Self {
            repo,
            audit,
            snapshot,
        }
    }

    pub async fn list(&self, identity: &Identity) -> TravelResult<Vec<WishlistItem>> {
        self.repo.list_wishlist(identity.user_id).await
    }

    pub async fn get(&self, identity: &Identity, id: WishlistItemId) -> TravelResult<WishlistItem> {
        self.repo
            .find_wishlist_item(identity.user_id, id)
            .await?
            .ok_or(TravelError::NotFound("Wishlist item"))
    }

    pub async fn create(
        &self,
        identity: &Identity,
        draft: WishlistDraft,
        client: ClientInfo,
    ) -> TravelResult<WishlistItem> {
        let item = draft.into_item(identity.user_id);
        self.repo.insert_wishlist_item(&item).await?;

        tracing::info!(
            item_id = %item.id,
            user_id = %identity.user_id,
            priority = item.priority.value(),
            "Wishlist item created"
        );

        self.audit
            .record(AuditEvent::insert(
                identity.user_id,
                tables::WISHLIST,
                item.id.into_uuid(),
                (self.snapshot)(&item),
                client,
            ))
            .await;

        Ok(item)
    }

    pub async fn update(
        &self,
        identity: &Identity,
        id: WishlistItemId,
        draft: WishlistDraft,
        client: ClientInfo,
    ) -> TravelResult<WishlistItem> {
        let old = self.get(identity, id).await?;
        let updated = draft.apply_to(&old);
        self.replace(identity, old, updated, client).await
    }

    /// Flip Pending <-> Realized. Audited as an UPDATE.
    pub async fn toggle_status(
        &self,
        identity: &Identity,
        id: WishlistItemId,
        client: ClientInfo,
    ) -> TravelResult<WishlistItem> {
        let old = self.get(identity, id).await?;
        let updated = old.with_status(old.status.toggled());
        self.replace(identity, old, updated, client).await
    }

    pub async fn delete(
        &self,
        identity: &Identity,
        id: WishlistItemId,
        client: ClientInfo,
    ) -> TravelResult<()> {
        let old = self.get(identity, id).await?;

        if !self.repo.delete_wishlist_item(identity.user_id, id).await? {
            return Err(TravelError::NotFound("Wishlist item"));
        }

        tracing::info!(item_id = %id, user_id = %identity.user_id, "Wishlist item deleted");

        self.audit
            .record(AuditEvent::delete(
                identity.user_id,
                tables::WISHLIST,
                id.into_uuid(),
                (self.snapshot)(&old),
                client,
            ))
            .await;

        Ok(())
    }

    async fn replace(
        &self,
        identity: &Identity,
        old: WishlistItem,
        updated: WishlistItem,
        client: ClientInfo,
    ) -> TravelResult<WishlistItem> {
        if !self.repo.update_wishlist_item(&updated).await? {
            return Err(TravelError::NotFound("Wishlist item"));
        }

        tracing::info!(
            item_id = %updated.id,
            user_id = %identity.user_id,
            status = %updated.status,
            "Wishlist item updated"
        );

        self.audit
            .record(AuditEvent::update(
                identity.user_id,
                tables::WISHLIST,
                updated.id.into_uuid(),
                (self.snapshot)(&old),
                (self.snapshot)(&updated),
                client,
            ))
            .await;

        Ok(updated)
    }
}
