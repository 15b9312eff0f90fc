//! Destination Entity
//!
//! Curated catalog entry. Read-only to the application and not owned by
//! any user.

use std::fmt;
use std::str::FromStr;

use kernel::id::DestinationId;
use serde::{Deserialize, Serialize};

use crate::error::TravelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
    Luxury,
}

impl BudgetLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "Low",
            BudgetLevel::Medium => "Medium",
            BudgetLevel::High => "High",
            BudgetLevel::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(BudgetLevel::Low),
            "Medium" => Ok(BudgetLevel::Medium),
            "High" => Ok(BudgetLevel::High),
            "Luxury" => Ok(BudgetLevel::Luxury),
            other => Err(TravelError::Internal(format!(
                "unknown budget level '{other}' in catalog"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub image_url: String,
    /// Category labels such as "Featured", "Seasonal", "Value"
    pub tags: Vec<String>,
    pub recommended_reason: String,
}

impl Destination {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
