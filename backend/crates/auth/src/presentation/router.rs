//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use audit::{AuditLogRepository, AuditRecorder, PgAuditLogRepository};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repositories
pub fn auth_router(
    users: PgUserRepository,
    audit: AuditRecorder<PgAuditLogRepository>,
    tokens: Arc<TokenService>,
    config: AuthConfig,
) -> Router {
    auth_router_generic(users, audit, tokens, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U, A>(
    users: U,
    audit: AuditRecorder<A>,
    tokens: Arc<TokenService>,
    config: AuthConfig,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        users: Arc::new(users),
        audit,
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<U, A>))
        .route("/login", post(handlers::login::<U, A>))
        .with_state(state)
}
