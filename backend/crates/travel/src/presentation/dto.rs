//! API DTOs (Data Transfer Objects)
//!
//! One request and one response shape per entity, camelCase on the wire.

use chrono::NaiveDate;
use kernel::id::{DestinationId, ExpenseId, JourneyId, WishlistItemId};
use serde::{Deserialize, Serialize};

use crate::domain::{BudgetLevel, ExpenseCategory, Priority, WishlistStatus};

// ============================================================================
// Journeys
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRequest {
    pub location: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResponse {
    pub id: JourneyId,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
}

// ============================================================================
// Expenses
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub location: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: ExpenseId,
    pub location: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub note: Option<String>,
}

// ============================================================================
// Wishlist
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest {
    pub location: String,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    /// Validated against 0/25/50/75/100 after parsing
    pub priority: i64,
    pub budget: Option<String>,
    pub status: Option<WishlistStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub id: WishlistItemId,
    pub location: String,
    pub planned_date: NaiveDate,
    pub reason: String,
    pub priority: Priority,
    pub budget: Option<String>,
    pub status: WishlistStatus,
}

// ============================================================================
// Destinations
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub image_url: String,
    pub tags: Vec<String>,
    pub recommended_reason: String,
}

// ============================================================================
// Common
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
