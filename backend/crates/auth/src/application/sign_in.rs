//! Sign In Use Case
//!
//! Verifies a user name / password pair and issues a token.

use std::sync::Arc;

use audit::{AuditEvent, AuditLogRepository, AuditRecorder};
use platform::client::ClientInfo;
use platform::password::ClearTextPassword;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U, A>
where
    U: UserRepository,
    A: AuditLogRepository,
{
    user_repo: Arc<U>,
    audit: AuditRecorder<A>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U, A> SignInUseCase<U, A>
where
    U: UserRepository,
    A: AuditLogRepository + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        audit: AuditRecorder<A>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            audit,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput, client: ClientInfo) -> AuthResult<AuthOutput> {
        // A name that could never have been registered cannot match a user
        let Ok(user_name) = UserName::new(&input.user_name) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::for_verification(input.password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User signed in");

        self.audit
            .record(AuditEvent::login(user.user_id, client))
            .await;

        let token = self.tokens.issue(user.user_id, user.user_name.original())?;

        Ok(AuthOutput {
            token,
            user_id: user.user_id,
            user_name: user.user_name.original().to_string(),
        })
    }
}
