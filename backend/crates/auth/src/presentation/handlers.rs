//! HTTP Handlers

use std::sync::Arc;

use audit::{AuditLogRepository, AuditRecorder};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{RegisterInput, RegisterUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthResponse, CredentialsRequest};
use crate::presentation::extract::{AuthJson, RequestMeta};

/// Shared state for auth handlers
pub struct AuthAppState<U, A> {
    pub users: Arc<U>,
    pub audit: AuditRecorder<A>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<U, A> Clone for AuthAppState<U, A> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            audit: self.audit.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/auth/register
pub async fn register<U, A>(
    State(state): State<AuthAppState<U, A>>,
    RequestMeta(client): RequestMeta,
    AuthJson(req): AuthJson<CredentialsRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    U: UserRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.users.clone(),
        state.audit.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input, client).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// POST /api/auth/login
pub async fn login<U, A>(
    State(state): State<AuthAppState<U, A>>,
    RequestMeta(client): RequestMeta,
    AuthJson(req): AuthJson<CredentialsRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    A: AuditLogRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.audit.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input, client).await?;

    Ok(Json(output.into()))
}
