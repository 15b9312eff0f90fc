//! Token Service
//!
//! Issues and verifies the HS256 bearer tokens carried in
//! `Authorization: Bearer <token>`.

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl: std::time::Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(&config.jwt_secret),
            decoding: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            issuer: config.issuer.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Issue a token valid from now for the configured TTL
    pub fn issue(&self, user_id: UserId, username: &str) -> AuthResult<String> {
        self.issue_at(user_id, username, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let expires_at = chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::Internal("Token lifetime out of range".to_string()))?;

        let claims = Claims {
            sub: user_id.into_uuid(),
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {e}")))
    }

    /// Check signature, issuer and expiry. Any failure is `InvalidToken`.
    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        Ok(Identity::new(
            UserId::from_uuid(data.claims.sub),
            data.claims.username,
        ))
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The scheme name is matched case-insensitively.
/// Absent header, non-ASCII value, another scheme or an empty token are all
/// `Unauthenticated`.
pub fn extract_bearer(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Unauthenticated)?
        .to_str()
        .map_err(|_| AuthError::Unauthenticated)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::Unauthenticated)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Unauthenticated);
    }
    let token = token.trim();

    if token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig::from_secret(secret))
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service("secret-a");
        let user_id = UserId::new();

        let token = tokens.issue(user_id, "alice").unwrap();
        let identity = tokens.verify(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = service("secret-a").issue(UserId::new(), "alice").unwrap();
        assert!(matches!(
            service("secret-b").verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let tokens = service("secret-a");
        let two_days_ago = Utc::now() - chrono::Duration::days(2);
        let token = tokens.issue_at(UserId::new(), "alice", two_days_ago).unwrap();
        assert!(matches!(tokens.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_foreign_issuer_is_invalid() {
        let mut other = AuthConfig::from_secret("secret-a");
        other.issuer = "someone-else".to_string();
        let token = TokenService::new(&other)
            .issue(UserId::new(), "alice")
            .unwrap();
        assert!(matches!(
            service("secret-a").verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            service("secret-a").verify("not.a.jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthError::Unauthenticated)
        ));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthError::Unauthenticated)
        ));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthError::Unauthenticated)
        ));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn test_extract_bearer_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        for value in ["bearer abc.def", "BEARER abc.def", "bEaReR abc.def"] {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert_eq!(extract_bearer(&headers).unwrap(), "abc.def");
        }

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearerabc.def"));
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn test_oversized_ttl_is_an_error_not_a_panic() {
        let config = AuthConfig::from_secret("secret-a")
            .with_token_ttl(std::time::Duration::from_secs(3_000_000_000 * 3600));
        let result = TokenService::new(&config).issue(UserId::new(), "alice");
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
