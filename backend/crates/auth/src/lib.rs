//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository traits
//! - `application/` - Register / login use cases, token service, config
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, extractors, bearer middleware
//!
//! ## Features
//! - User registration and login with username + password
//! - Stateless HS256 bearer tokens
//! - `require_bearer` middleware that attaches an [`Identity`] to the request
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Missing or malformed `Authorization` header: 401
//! - Token that fails signature, issuer, or expiry checks: 403
//! - Every successful login is written to the audit trail

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::value_object::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::extract::RequestMeta;
pub use presentation::middleware::require_bearer;
pub use presentation::router::{auth_router, auth_router_generic};
