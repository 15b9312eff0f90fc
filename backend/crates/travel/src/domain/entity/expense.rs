//! Expense Entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{ExpenseId, UserId};
use serde::{Deserialize, Serialize};

use super::required_text;
use crate::error::{TravelError, TravelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Transport,
    Accommodation,
    Food,
    Shopping,
    Activities,
    Other,
}

impl ExpenseCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Transport" => Ok(ExpenseCategory::Transport),
            "Accommodation" => Ok(ExpenseCategory::Accommodation),
            "Food" => Ok(ExpenseCategory::Food),
            "Shopping" => Ok(ExpenseCategory::Shopping),
            "Activities" => Ok(ExpenseCategory::Activities),
            "Other" => Ok(ExpenseCategory::Other),
            other => Err(TravelError::Internal(format!(
                "unknown expense category '{other}' in storage"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub owner_id: UserId,
    pub location: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated expense fields, used for both create and full replace
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    location: String,
    amount: f64,
    date: NaiveDate,
    category: ExpenseCategory,
    note: Option<String>,
}

impl ExpenseDraft {
    pub fn new(
        location: String,
        amount: f64,
        date: NaiveDate,
        category: ExpenseCategory,
        note: Option<String>,
    ) -> TravelResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TravelError::Validation(
                "amount must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            location: required_text("location", location)?,
            amount,
            date,
            category,
            // Stored as typed; only an all-blank note collapses to none
            note: note.filter(|n| !n.trim().is_empty()),
        })
    }

    pub fn into_expense(self, owner_id: UserId) -> Expense {
        Expense {
            id: ExpenseId::new(),
            owner_id,
            location: self.location,
            amount: self.amount,
            date: self.date,
            category: self.category,
            note: self.note,
            created_at: Utc::now(),
        }
    }

    /// Replace every user-editable field of `current`
    pub fn apply_to(self, current: &Expense) -> Expense {
        Expense {
            location: self.location,
            amount: self.amount,
            date: self.date,
            category: self.category,
            note: self.note,
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = ExpenseDraft::new("Paris".into(), -1.0, date(), ExpenseCategory::Food, None);
        assert!(matches!(result, Err(TravelError::Validation(_))));
    }

    #[test]
    fn test_note_is_kept_verbatim() {
        let expense = ExpenseDraft::new(
            "Narita".into(),
            42.0,
            date(),
            ExpenseCategory::Transport,
            Some("  airport taxi <&> \"quoted\"".into()),
        )
        .unwrap()
        .into_expense(UserId::new());

        assert_eq!(
            expense.note.as_deref(),
            Some("  airport taxi <&> \"quoted\"")
        );
    }

    #[test]
    fn test_blank_note_becomes_none() {
        let draft =
            ExpenseDraft::new("Rome".into(), 3.0, date(), ExpenseCategory::Food, Some("  ".into()))
                .unwrap();
        assert!(draft.into_expense(UserId::new()).note.is_none());
    }

    #[test]
    fn test_apply_to_keeps_identity() {
        let original = ExpenseDraft::new("Oslo".into(), 10.0, date(), ExpenseCategory::Food, None)
            .unwrap()
            .into_expense(UserId::new());
        let updated = ExpenseDraft::new(
            "Bergen".into(),
            12.5,
            date(),
            ExpenseCategory::Shopping,
            Some("souvenir".into()),
        )
        .unwrap()
        .apply_to(&original);

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.owner_id, original.owner_id);
        assert_eq!(updated.location, "Bergen");
        assert_eq!(updated.category, ExpenseCategory::Shopping);
    }

    #[test]
    fn test_unknown_stored_category_is_rejected() {
        assert_eq!("Food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert!("Fuel".parse::<ExpenseCategory>().is_err());
    }
}
