//! Wishlist Entity
//!
//! A place the user wants to visit, ranked by [`Priority`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{UserId, WishlistItemId};
use serde::{Deserialize, Serialize};

use super::required_text;
use crate::error::{TravelError, TravelResult};

/// Priority on a 0..=100 scale in steps of 25.
///
/// Out-of-range or off-step values are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const STEP: i64 = 25;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> TravelResult<Self> {
        if !(0..=Self::MAX).contains(&value) || value % Self::STEP != 0 {
            return Err(TravelError::Validation(format!(
                "priority must be one of 0, 25, 50, 75, 100 (got {value})"
            )));
        }
        // 0..=100 fits in u8
        Ok(Self(value as u8))
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WishlistStatus {
    #[default]
    Pending,
    Realized,
}

impl WishlistStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WishlistStatus::Pending => "Pending",
            WishlistStatus::Realized => "Realized",
        }
    }

    /// Pending <-> Realized
    pub const fn toggled(self) -> Self {
        match self {
            WishlistStatus::Pending => WishlistStatus::Realized,
            WishlistStatus::Realized => WishlistStatus::Pending,
        }
    }
}

impl fmt::Display for WishlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WishlistStatus {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(WishlistStatus::Pending),
            "Realized" => Ok(WishlistStatus::Realized),
            other => Err(TravelError::Internal(format!(
                "unknown wishlist status '{other}' in storage"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub owner_id: UserId,
    pub location: String,
    pub planned_date: NaiveDate,
    pub reason: String,
    pub priority: Priority,
    /// Free-form budget note, e.g. "about 2000 EUR"
    pub budget: Option<String>,
    pub status: WishlistStatus,
    pub created_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn with_status(&self, status: WishlistStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Validated wishlist fields, used for both create and full replace
#[derive(Debug, Clone)]
pub struct WishlistDraft {
    location: String,
    planned_date: NaiveDate,
    reason: String,
    priority: Priority,
    budget: Option<String>,
    status: Option<WishlistStatus>,
}

impl WishlistDraft {
    pub fn new(
        location: String,
        planned_date: NaiveDate,
        reason: String,
        priority: i64,
        budget: Option<String>,
        status: Option<WishlistStatus>,
    ) -> TravelResult<Self> {
        Ok(Self {
            location: required_text("location", location)?,
            planned_date,
            reason: reason.trim().to_string(),
            priority: Priority::new(priority)?,
            budget: budget.filter(|b| !b.trim().is_empty()),
            status,
        })
    }

    /// New item; status defaults to Pending
    pub fn into_item(self, owner_id: UserId) -> WishlistItem {
        WishlistItem {
            id: WishlistItemId::new(),
            owner_id,
            location: self.location,
            planned_date: self.planned_date,
            reason: self.reason,
            priority: self.priority,
            budget: self.budget,
            status: self.status.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// Replace every user-editable field of `current`; an omitted status
    /// keeps the current one.
    pub fn apply_to(self, current: &WishlistItem) -> WishlistItem {
        WishlistItem {
            location: self.location,
            planned_date: self.planned_date,
            reason: self.reason,
            priority: self.priority,
            budget: self.budget,
            status: self.status.unwrap_or(current.status),
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(priority: i64, status: Option<WishlistStatus>) -> TravelResult<WishlistDraft> {
        WishlistDraft::new(
            "Reykjavik".into(),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            "Northern lights".into(),
            priority,
            Some("2000 EUR".into()),
            status,
        )
    }

    #[test]
    fn test_priority_accepts_only_quarter_steps() {
        for ok in [0, 25, 50, 75, 100] {
            assert_eq!(Priority::new(ok).unwrap().value() as i64, ok);
        }
        for bad in [-25, 10, 99, 125, 1000] {
            assert!(matches!(Priority::new(bad), Err(TravelError::Validation(_))));
        }
    }

    #[test]
    fn test_priority_serializes_as_number() {
        assert_eq!(serde_json::to_value(Priority::new(75).unwrap()).unwrap(), 75);
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let item = draft(50, None).unwrap().into_item(UserId::new());
        assert_eq!(item.status, WishlistStatus::Pending);
    }

    #[test]
    fn test_update_without_status_keeps_current() {
        let item = draft(50, Some(WishlistStatus::Realized))
            .unwrap()
            .into_item(UserId::new());
        let updated = draft(100, None).unwrap().apply_to(&item);

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.priority.value(), 100);
        assert_eq!(updated.status, WishlistStatus::Realized);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(WishlistStatus::Pending.toggled(), WishlistStatus::Realized);
        assert_eq!(WishlistStatus::Realized.toggled(), WishlistStatus::Pending);
    }
}
