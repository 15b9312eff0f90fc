//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary shared by
//! the auth, audit and travel crates:
//! - Common error types and result aliases
//! - Typed UUID identifiers for every persisted entity
//!
//! Only things with a consistent meaning across all domains live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
