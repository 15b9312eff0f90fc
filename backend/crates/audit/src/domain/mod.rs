//! Domain Layer
//!
//! Audit entries and the repository interface.

pub mod entry;
pub mod repository;
