//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Client identification (origin IP, User-Agent) for the audit trail
//! - Password hashing (Argon2id)

pub mod client;
pub mod password;
