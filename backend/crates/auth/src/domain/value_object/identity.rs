//! Verified caller identity, produced by the token verifier.

use derive_more::Display;
use kernel::id::UserId;

/// The authenticated caller of a protected request.
///
/// Only [`crate::TokenService::verify`] constructs one from a request, so a
/// handler holding an `Identity` knows the bearer token was valid.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{username} ({user_id})")]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
}

impl Identity {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
