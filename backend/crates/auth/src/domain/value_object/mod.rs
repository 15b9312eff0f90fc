//! Value Object Module

pub mod identity;
pub mod user_name;
