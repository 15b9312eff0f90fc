//! Entity Module

pub mod destination;
pub mod expense;
pub mod journey;
pub mod wishlist;

use crate::error::{TravelError, TravelResult};

/// Trimmed, non-blank text for a required field
pub(crate) fn required_text(field: &str, value: String) -> TravelResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TravelError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
