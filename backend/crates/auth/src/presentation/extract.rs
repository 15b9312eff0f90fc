//! Request Extractors

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequest, FromRequestParts};
use axum::http::request::Parts;
use platform::client::ClientInfo;

use crate::domain::value_object::identity::Identity;
use crate::error::AuthError;

/// `Json` whose rejection renders as an [`AuthError`] (400)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct AuthJson<T>(pub T);

/// Identity attached by [`crate::require_bearer`].
///
/// On a route without the middleware this rejects with 401.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Origin IP and User-Agent of the request, for the audit trail.
///
/// Uses `ConnectInfo` when the server provides it; never rejects.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta(pub ClientInfo);

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let direct_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self(ClientInfo::from_headers(&parts.headers, direct_ip)))
    }
}
