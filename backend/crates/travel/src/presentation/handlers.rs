//! HTTP Handlers
//!
//! Protected handlers take the caller's [`Identity`] (attached by the bearer
//! middleware) and [`RequestMeta`] as explicit arguments and pass both down
//! to the services.

use std::sync::Arc;

use audit::{AuditLogRepository, AuditRecorder};
use auth::{Identity, RequestMeta};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::id::{DestinationId, ExpenseId, JourneyId, WishlistItemId};

use crate::application::{DestinationService, ExpenseService, JourneyService, WishlistService};
use crate::domain::repository::TravelStore;
use crate::domain::{ExpenseDraft, JourneyDraft, WishlistDraft};
use crate::error::TravelResult;
use crate::presentation::dto::{
    DestinationQuery, DestinationResponse, ExpenseRequest, ExpenseResponse, JourneyRequest,
    JourneyResponse, MessageResponse, WishlistRequest, WishlistResponse,
};
use crate::presentation::extract::{TravelJson, TravelPath, TravelQuery};
use crate::presentation::mapper::{expense_snapshot, journey_snapshot, wishlist_snapshot};

/// Shared state for travel handlers
pub struct TravelAppState<S, A> {
    pub store: Arc<S>,
    pub audit: AuditRecorder<A>,
}

impl<S, A> Clone for TravelAppState<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            audit: self.audit.clone(),
        }
    }
}

impl<S, A> TravelAppState<S, A>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    fn journeys(&self) -> JourneyService<S, A> {
        JourneyService::new(self.store.clone(), self.audit.clone(), journey_snapshot)
    }

    fn expenses(&self) -> ExpenseService<S, A> {
        ExpenseService::new(self.store.clone(), self.audit.clone(), expense_snapshot)
    }

    fn wishlist(&self) -> WishlistService<S, A> {
        WishlistService::new(self.store.clone(), self.audit.clone(), wishlist_snapshot)
    }

    fn destinations(&self) -> DestinationService<S> {
        DestinationService::new(self.store.clone())
    }
}

// ============================================================================
// Destinations (public)
// ============================================================================

/// GET /api/destinations[?category=]
pub async fn list_destinations<S, A>(
    State(state): State<TravelAppState<S, A>>,
    TravelQuery(query): TravelQuery<DestinationQuery>,
) -> TravelResult<Json<Vec<DestinationResponse>>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let destinations = state.destinations().list(query.category.as_deref()).await?;
    Ok(Json(destinations.iter().map(Into::into).collect()))
}

/// GET /api/destinations/{id}
pub async fn get_destination<S, A>(
    State(state): State<TravelAppState<S, A>>,
    TravelPath(id): TravelPath<DestinationId>,
) -> TravelResult<Json<DestinationResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let destination = state.destinations().get(id).await?;
    Ok(Json((&destination).into()))
}

// ============================================================================
// Journeys
// ============================================================================

/// GET /api/journeys
pub async fn list_journeys<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
) -> TravelResult<Json<Vec<JourneyResponse>>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let journeys = state.journeys().list(&identity).await?;
    Ok(Json(journeys.iter().map(Into::into).collect()))
}

/// GET /api/journeys/{id}
pub async fn get_journey<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    TravelPath(id): TravelPath<JourneyId>,
) -> TravelResult<Json<JourneyResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let journey = state.journeys().get(&identity, id).await?;
    Ok(Json((&journey).into()))
}

/// POST /api/journeys
pub async fn create_journey<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelJson(req): TravelJson<JourneyRequest>,
) -> TravelResult<(StatusCode, Json<JourneyResponse>)>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let draft = JourneyDraft::try_from(req)?;
    let journey = state.journeys().create(&identity, draft, client).await?;
    Ok((StatusCode::CREATED, Json((&journey).into())))
}

/// DELETE /api/journeys/{id}
pub async fn delete_journey<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<JourneyId>,
) -> TravelResult<Json<MessageResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    state.journeys().delete(&identity, id, client).await?;
    Ok(Json(MessageResponse::new("Journey deleted")))
}

// ============================================================================
// Expenses
// ============================================================================

/// GET /api/expenses
pub async fn list_expenses<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
) -> TravelResult<Json<Vec<ExpenseResponse>>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let expenses = state.expenses().list(&identity).await?;
    Ok(Json(expenses.iter().map(Into::into).collect()))
}

/// GET /api/expenses/{id}
pub async fn get_expense<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    TravelPath(id): TravelPath<ExpenseId>,
) -> TravelResult<Json<ExpenseResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let expense = state.expenses().get(&identity, id).await?;
    Ok(Json((&expense).into()))
}

/// POST /api/expenses
pub async fn create_expense<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelJson(req): TravelJson<ExpenseRequest>,
) -> TravelResult<(StatusCode, Json<ExpenseResponse>)>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let draft = ExpenseDraft::try_from(req)?;
    let expense = state.expenses().create(&identity, draft, client).await?;
    Ok((StatusCode::CREATED, Json((&expense).into())))
}

/// PUT /api/expenses/{id}
pub async fn update_expense<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<ExpenseId>,
    TravelJson(req): TravelJson<ExpenseRequest>,
) -> TravelResult<Json<ExpenseResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let draft = ExpenseDraft::try_from(req)?;
    let expense = state.expenses().update(&identity, id, draft, client).await?;
    Ok(Json((&expense).into()))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<ExpenseId>,
) -> TravelResult<Json<MessageResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    state.expenses().delete(&identity, id, client).await?;
    Ok(Json(MessageResponse::new("Expense deleted")))
}

// ============================================================================
// Wishlist
// ============================================================================

/// GET /api/wishlist
pub async fn list_wishlist<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
) -> TravelResult<Json<Vec<WishlistResponse>>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let items = state.wishlist().list(&identity).await?;
    Ok(Json(items.iter().map(Into::into).collect()))
}

/// GET /api/wishlist/{id}
pub async fn get_wishlist_item<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    TravelPath(id): TravelPath<WishlistItemId>,
) -> TravelResult<Json<WishlistResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let item = state.wishlist().get(&identity, id).await?;
    Ok(Json((&item).into()))
}

/// POST /api/wishlist
pub async fn create_wishlist_item<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelJson(req): TravelJson<WishlistRequest>,
) -> TravelResult<(StatusCode, Json<WishlistResponse>)>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let draft = WishlistDraft::try_from(req)?;
    let item = state.wishlist().create(&identity, draft, client).await?;
    Ok((StatusCode::CREATED, Json((&item).into())))
}

/// PUT /api/wishlist/{id}
pub async fn update_wishlist_item<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<WishlistItemId>,
    TravelJson(req): TravelJson<WishlistRequest>,
) -> TravelResult<Json<WishlistResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let draft = WishlistDraft::try_from(req)?;
    let item = state.wishlist().update(&identity, id, draft, client).await?;
    Ok(Json((&item).into()))
}

/// PATCH /api/wishlist/{id}/status
pub async fn toggle_wishlist_status<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<WishlistItemId>,
) -> TravelResult<Json<WishlistResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let item = state.wishlist().toggle_status(&identity, id, client).await?;
    Ok(Json((&item).into()))
}

/// DELETE /api/wishlist/{id}
pub async fn delete_wishlist_item<S, A>(
    State(state): State<TravelAppState<S, A>>,
    identity: Identity,
    RequestMeta(client): RequestMeta,
    TravelPath(id): TravelPath<WishlistItemId>,
) -> TravelResult<Json<MessageResponse>>
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    state.wishlist().delete(&identity, id, client).await?;
    Ok(Json(MessageResponse::new("Wishlist item deleted")))
}
