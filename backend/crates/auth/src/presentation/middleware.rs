//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::token::{TokenService, extract_bearer};
use crate::error::AuthError;

/// Middleware that requires a valid bearer token.
///
/// On success the caller's [`crate::Identity`] is inserted into the request
/// extensions. Use with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = tokens.verify(extract_bearer(req.headers())?)?;

    tracing::debug!(user_id = %identity.user_id, "Bearer token accepted");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
