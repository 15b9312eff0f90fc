//! Travel Backend Module
//!
//! Journeys, expenses and wishlist items owned by the authenticated user,
//! plus the read-only destination catalog.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validated drafts, repository traits
//! - `application/` - Per-resource services (validate, write, audit)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, response mapper, router
//!
//! Every owner-scoped query filters on both the row id and the owner id, so
//! a row belonging to someone else is indistinguishable from a missing one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::repository::TravelStore;
pub use error::{TravelError, TravelResult};
pub use infra::postgres::PgTravelRepository;
pub use presentation::router::{travel_router, travel_router_generic};
