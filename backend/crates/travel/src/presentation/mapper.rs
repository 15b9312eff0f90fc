//! Response Mapper
//!
//! Domain rows to wire DTOs (borrowed, never mutated) and request DTOs to
//! validated drafts.

use audit::snapshot;
use serde_json::Value;

use crate::domain::{
    Destination, Expense, ExpenseDraft, Journey, JourneyDraft, WishlistDraft, WishlistItem,
};
use crate::error::TravelError;
use crate::presentation::dto::{
    DestinationResponse, ExpenseRequest, ExpenseResponse, JourneyRequest, JourneyResponse,
    WishlistRequest, WishlistResponse,
};

// Audit snapshots, handed to the services as `application::Snapshot`

pub fn journey_snapshot(journey: &Journey) -> Option<Value> {
    snapshot(&JourneyResponse::from(journey))
}

pub fn expense_snapshot(expense: &Expense) -> Option<Value> {
    snapshot(&ExpenseResponse::from(expense))
}

pub fn wishlist_snapshot(item: &WishlistItem) -> Option<Value> {
    snapshot(&WishlistResponse::from(item))
}

impl From<&Journey> for JourneyResponse {
    fn from(j: &Journey) -> Self {
        Self {
            id: j.id,
            location: j.location.clone(),
            date: j.date,
            description: j.description.clone(),
        }
    }
}

impl TryFrom<JourneyRequest> for JourneyDraft {
    type Error = TravelError;

    fn try_from(req: JourneyRequest) -> Result<Self, Self::Error> {
        JourneyDraft::new(req.location, req.date, req.description)
    }
}

impl From<&Expense> for ExpenseResponse {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id,
            location: e.location.clone(),
            amount: e.amount,
            category: e.category,
            date: e.date,
            note: e.note.clone(),
        }
    }
}

impl TryFrom<ExpenseRequest> for ExpenseDraft {
    type Error = TravelError;

    fn try_from(req: ExpenseRequest) -> Result<Self, Self::Error> {
        ExpenseDraft::new(req.location, req.amount, req.date, req.category, req.note)
    }
}

impl From<&WishlistItem> for WishlistResponse {
    fn from(w: &WishlistItem) -> Self {
        Self {
            id: w.id,
            location: w.location.clone(),
            planned_date: w.planned_date,
            reason: w.reason.clone(),
            priority: w.priority,
            budget: w.budget.clone(),
            status: w.status,
        }
    }
}

impl TryFrom<WishlistRequest> for WishlistDraft {
    type Error = TravelError;

    fn try_from(req: WishlistRequest) -> Result<Self, Self::Error> {
        WishlistDraft::new(
            req.location,
            req.planned_date,
            req.reason,
            req.priority,
            req.budget,
            req.status,
        )
    }
}

impl From<&Destination> for DestinationResponse {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            country: d.country.clone(),
            description: d.description.clone(),
            best_season: d.best_season.clone(),
            budget_level: d.budget_level,
            image_url: d.image_url.clone(),
            tags: d.tags.clone(),
            recommended_reason: d.recommended_reason.clone(),
        }
    }
}
