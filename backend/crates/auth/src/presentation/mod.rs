//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::{AuthJson, RequestMeta};
pub use handlers::AuthAppState;
pub use middleware::require_bearer;
pub use router::{auth_router, auth_router_generic};
