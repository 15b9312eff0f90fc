//! Presentation Layer
//!
//! HTTP handlers, DTOs, response mapper, extractors, router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod router;

pub use handlers::TravelAppState;
pub use router::{travel_router, travel_router_generic};
