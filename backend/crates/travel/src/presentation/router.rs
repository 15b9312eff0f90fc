//! Travel Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch},
};
use std::sync::Arc;

use audit::{AuditLogRepository, AuditRecorder, PgAuditLogRepository};
use auth::{TokenService, require_bearer};

use crate::domain::repository::TravelStore;
use crate::infra::postgres::PgTravelRepository;
use crate::presentation::handlers::{self, TravelAppState};

/// Create the Travel router with PostgreSQL repositories
pub fn travel_router(
    store: PgTravelRepository,
    audit: AuditRecorder<PgAuditLogRepository>,
    tokens: Arc<TokenService>,
) -> Router {
    travel_router_generic(store, audit, tokens)
}

/// Create a generic Travel router for any store implementation.
///
/// Destination routes are public; everything else sits behind
/// [`require_bearer`].
pub fn travel_router_generic<S, A>(
    store: S,
    audit: AuditRecorder<A>,
    tokens: Arc<TokenService>,
) -> Router
where
    S: TravelStore,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let state = TravelAppState {
        store: Arc::new(store),
        audit,
    };

    let public = Router::new()
        .route("/destinations", get(handlers::list_destinations::<S, A>))
        .route("/destinations/{id}", get(handlers::get_destination::<S, A>));

    let protected = Router::new()
        .route(
            "/journeys",
            get(handlers::list_journeys::<S, A>).post(handlers::create_journey::<S, A>),
        )
        .route(
            "/journeys/{id}",
            get(handlers::get_journey::<S, A>).delete(handlers::delete_journey::<S, A>),
        )
        .route(
            "/expenses",
            get(handlers::list_expenses::<S, A>).post(handlers::create_expense::<S, A>),
        )
        .route(
            "/expenses/{id}",
            get(handlers::get_expense::<S, A>)
                .put(handlers::update_expense::<S, A>)
                .delete(handlers::delete_expense::<S, A>),
        )
        .route(
            "/wishlist",
            get(handlers::list_wishlist::<S, A>).post(handlers::create_wishlist_item::<S, A>),
        )
        .route(
            "/wishlist/{id}",
            get(handlers::get_wishlist_item::<S, A>)
                .put(handlers::update_wishlist_item::<S, A>)
                .delete(handlers::delete_wishlist_item::<S, A>),
        )
        .route(
            "/wishlist/{id}/status",
            patch(handlers::toggle_wishlist_status::<S, A>),
        )
        .route_layer(from_fn_with_state(tokens, require_bearer));

    public.merge(protected).with_state(state)
}
