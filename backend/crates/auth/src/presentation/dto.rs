//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::AuthOutput;

/// Register / login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Public part of the account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Register / login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<AuthOutput> for AuthResponse {
    fn from(output: AuthOutput) -> Self {
        Self {
            token: output.token,
            user: UserResponse {
                id: output.user_id.to_string(),
                username: output.user_name,
            },
        }
    }
}
