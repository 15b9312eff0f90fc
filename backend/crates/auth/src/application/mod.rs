//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod register;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use token::{Claims, TokenService, extract_bearer};

use kernel::id::UserId;

/// Output of both register and sign in: a fresh token for the account.
#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub token: String,
    pub user_id: UserId,
    pub user_name: String,
}
