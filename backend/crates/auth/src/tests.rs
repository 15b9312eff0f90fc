//! Router-level tests for the auth crate

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use audit::{AuditAction, AuditLogEntry, AuditLogRepository, AuditRecorder, AuditResult};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use crate::presentation::router::auth_router_generic;

#[derive(Default)]
struct MemoryUsers {
    users: Mutex<HashMap<String, User>>,
}

impl UserRepository for MemoryUsers {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let key = user.user_name.canonical().to_string();
        if users.contains_key(&key) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(key, user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(user_name.canonical()).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(user_name.canonical()))
    }
}

#[derive(Default)]
struct MemoryLog {
    entries: Mutex<Vec<AuditLogEntry>>,
}

impl AuditLogRepository for MemoryLog {
    async fn append(&self, entry: &AuditLogEntry) -> AuditResult<()> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

struct Harness {
    app: Router,
    log: Arc<MemoryLog>,
    tokens: Arc<TokenService>,
}

fn harness() -> Harness {
    let config = AuthConfig::development();
    let tokens = Arc::new(TokenService::new(&config));
    let log = Arc::new(MemoryLog::default());
    let app = auth_router_generic(
        MemoryUsers::default(),
        AuditRecorder::new(log.clone()),
        tokens.clone(),
        config,
    );
    Harness { app, log, tokens }
}

async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::USER_AGENT, "auth-tests/1.0")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[cfg(test)]
mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_returns_token_for_new_user() {
        let h = harness();

        let response = post_json(
            &h.app,
            "/register",
            json!({"username": "Alice", "password": "correct horse"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "Alice");

        let identity = h.tokens.verify(body["token"].as_str().unwrap()).unwrap();
        assert_eq!(identity.user_id.to_string(), body["user"]["id"]);

        let entries = h.log.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Insert);
        assert_eq!(entries[0].target_table, "users");
        assert_eq!(entries[0].user_agent.as_deref(), Some("auth-tests/1.0"));
        // The hash never reaches the audit trail
        assert!(!entries[0].new_value.as_ref().unwrap().to_string().contains("argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let h = harness();
        let creds = json!({"username": "bob", "password": "correct horse"});
        post_json(&h.app, "/register", creds).await;

        let response = post_json(
            &h.app,
            "/register",
            json!({"username": "BOB", "password": "another secret"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_validation_failures() {
        let h = harness();

        let short_password =
            post_json(&h.app, "/register", json!({"username": "carol", "password": "short"})).await;
        assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);

        let bad_name = post_json(
            &h.app,
            "/register",
            json!({"username": "c a r o l", "password": "correct horse"}),
        )
        .await;
        assert_eq!(bad_name.status(), StatusCode::BAD_REQUEST);

        let missing_field = post_json(&h.app, "/register", json!({"username": "carol"})).await;
        assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);

        assert!(h.log.entries.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_records_audit_entry() {
        let h = harness();
        post_json(
            &h.app,
            "/register",
            json!({"username": "dora", "password": "correct horse"}),
        )
        .await;

        let response = post_json(
            &h.app,
            "/login",
            json!({"username": "DORA", "password": "correct horse"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "dora");
        assert!(h.tokens.verify(body["token"].as_str().unwrap()).is_ok());

        let entries = h.log.entries.lock().unwrap();
        let login = entries.last().unwrap();
        assert_eq!(login.action, AuditAction::Login);
        assert_eq!(login.target_table, "users");
        assert_eq!(login.target_id, Some(login.user_id.into_uuid()));
        assert!(login.old_value.is_none() && login.new_value.is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let h = harness();
        post_json(
            &h.app,
            "/register",
            json!({"username": "erin", "password": "correct horse"}),
        )
        .await;

        let wrong_password = post_json(
            &h.app,
            "/login",
            json!({"username": "erin", "password": "battery staple"}),
        )
        .await;
        let unknown_user = post_json(
            &h.app,
            "/login",
            json!({"username": "nobody", "password": "battery staple"}),
        )
        .await;

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(wrong_password).await, body_json(unknown_user).await);

        // Only the registration was audited
        assert_eq!(h.log.entries.lock().unwrap().len(), 1);
    }
}

#[cfg(test)]
mod middleware_tests {
    use super::*;
    use crate::domain::value_object::identity::Identity;
    use crate::presentation::middleware::require_bearer;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use kernel::id::UserId;

    async fn whoami(identity: Identity) -> String {
        identity.username
    }

    fn protected(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(from_fn_with_state(tokens, require_bearer))
    }

    async fn get_with(app: Router, authorization: Option<&str>) -> Response {
        let mut request = Request::get("/whoami");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_bearer_is_unauthorized() {
        let tokens = Arc::new(TokenService::new(&AuthConfig::development()));
        let response = get_with(protected(tokens), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_tokens_are_forbidden() {
        let tokens = Arc::new(TokenService::new(&AuthConfig::development()));
        let foreign = TokenService::new(&AuthConfig::development())
            .issue(UserId::new(), "mallory")
            .unwrap();

        let garbage = get_with(protected(tokens.clone()), Some("Bearer garbage")).await;
        assert_eq!(garbage.status(), StatusCode::FORBIDDEN);

        let wrong_secret =
            get_with(protected(tokens), Some(&format!("Bearer {foreign}"))).await;
        assert_eq!(wrong_secret.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_bearer_reaches_handler_with_identity() {
        let tokens = Arc::new(TokenService::new(&AuthConfig::development()));
        let token = tokens.issue(UserId::new(), "frank").unwrap();

        let response = get_with(protected(tokens), Some(&format!("Bearer {token}"))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"frank");
    }
}
