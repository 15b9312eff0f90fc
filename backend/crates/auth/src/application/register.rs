//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use audit::{AuditEvent, AuditLogRepository, AuditRecorder};
use platform::client::ClientInfo;
use platform::password::ClearTextPassword;
use serde_json::json;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U, A>
where
    U: UserRepository,
    A: AuditLogRepository,
{
    user_repo: Arc<U>,
    audit: AuditRecorder<A>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U, A> RegisterUseCase<U, A>
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

    pub async fn execute(&self, input: RegisterInput, client: ClientInfo) -> AuthResult<AuthOutput> {
        // Validate user name
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate password before touching the store
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        // Check if user name is taken
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        self.audit
            .record(AuditEvent::insert(
                user.user_id,
                "users",
                user.user_id.into_uuid(),
                Some(json!({
                    "id": user.user_id,
                    "username": user.user_name.original(),
                })),
                client,
            ))
            .await;

        let token = self.tokens.issue(user.user_id, user.user_name.original())?;

        Ok(AuthOutput {
            token,
            user_id: user.user_id,
            user_name: user.user_name.original().to_string(),
        })
    }
}
