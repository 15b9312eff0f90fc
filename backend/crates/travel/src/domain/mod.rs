//! Domain Layer
//!
//! Contains entities, validated drafts, and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{
    destination::{BudgetLevel, Destination},
    expense::{Expense, ExpenseCategory, ExpenseDraft},
    journey::{Journey, JourneyDraft},
    wishlist::{Priority, WishlistDraft, WishlistItem, WishlistStatus},
};
pub use repository::{
    DestinationRepository, ExpenseRepository, JourneyRepository, TravelStore, WishlistRepository,
};
