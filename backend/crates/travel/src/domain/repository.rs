//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Owner-scoped methods take the owner id alongside the row id and must
//! filter on both, including in UPDATE and DELETE statements. `update_*`
//! and `delete_*` return `false` when no owned row matched.

use kernel::id::{DestinationId, ExpenseId, JourneyId, UserId, WishlistItemId};

use crate::domain::entity::{
    destination::Destination, expense::Expense, journey::Journey, wishlist::WishlistItem,
};
use crate::error::TravelResult;

/// Journey repository trait (`travel_footprints`)
#[trait_variant::make(JourneyRepository: Send)]
pub trait LocalJourneyRepository {
    /// Newest date first, then newest created
    async fn list_journeys(&self, owner: UserId) -> TravelResult<Vec<Journey>>;

    async fn find_journey(&self, owner: UserId, id: JourneyId) -> TravelResult<Option<Journey>>;

    async fn insert_journey(&self, journey: &Journey) -> TravelResult<()>;

    async fn delete_journey(&self, owner: UserId, id: JourneyId) -> TravelResult<bool>;
}

/// Expense repository trait (`expenses`)
#[trait_variant::make(ExpenseRepository: Send)]
pub trait LocalExpenseRepository {
    /// Newest date first, then newest created
    async fn list_expenses(&self, owner: UserId) -> TravelResult<Vec<Expense>>;

    async fn find_expense(&self, owner: UserId, id: ExpenseId) -> TravelResult<Option<Expense>>;

    async fn insert_expense(&self, expense: &Expense) -> TravelResult<()>;

    /// Overwrite all mutable fields, scoped by `expense.owner_id`
    async fn update_expense(&self, expense: &Expense) -> TravelResult<bool>;

    async fn delete_expense(&self, owner: UserId, id: ExpenseId) -> TravelResult<bool>;
}

/// Wishlist repository trait (`wishlist`)
#[trait_variant::make(WishlistRepository: Send)]
pub trait LocalWishlistRepository {
    /// Highest priority first, then newest created
    async fn list_wishlist(&self, owner: UserId) -> TravelResult<Vec<WishlistItem>>;

    async fn find_wishlist_item(
        &self,
        owner: UserId,
        id: WishlistItemId,
    ) -> TravelResult<Option<WishlistItem>>;

    async fn insert_wishlist_item(&self, item: &WishlistItem) -> TravelResult<()>;

    /// Overwrite all mutable fields, scoped by `item.owner_id`
    async fn update_wishlist_item(&self, item: &WishlistItem) -> TravelResult<bool>;

    async fn delete_wishlist_item(&self, owner: UserId, id: WishlistItemId) -> TravelResult<bool>;
}

/// Destination catalog (read-only)
#[trait_variant::make(DestinationRepository: Send)]
pub trait LocalDestinationRepository {
    /// All destinations, or only those tagged with `category`
    async fn list_destinations(&self, category: Option<&str>) -> TravelResult<Vec<Destination>>;

    async fn find_destination(&self, id: DestinationId) -> TravelResult<Option<Destination>>;
}

/// Everything the travel router needs from one storage backend
pub trait TravelStore:
    JourneyRepository
    + ExpenseRepository
    + WishlistRepository
    + DestinationRepository
    + Send
    + Sync
    + 'static
{
}

impl<T> TravelStore for T where
    T: JourneyRepository
        + ExpenseRepository
        + WishlistRepository
        + DestinationRepository
        + Send
        + Sync
        + 'static
{
}
