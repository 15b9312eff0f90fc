//! Application Layer
//!
//! One service per resource. Mutations run in a fixed order: validate (the
//! caller hands in an already validated draft), read the prior row when the
//! audit needs it, write, then record exactly one audit event. Any failure
//! before the write returns early, so failed operations leave no audit trace.

pub mod destinations;
pub mod expenses;
pub mod journeys;
pub mod wishlist;

pub use destinations::DestinationService;
pub use expenses::ExpenseService;
pub use journeys::JourneyService;
pub use wishlist::WishlistService;

/// Renders an entity as the JSON stored in `audit_log.old_value` /
/// `new_value`. The presentation layer supplies these so snapshots share the
/// wire shape.
pub type Snapshot<T> = fn(&T) -> Option<serde_json::Value>;

/// Audit target tables
pub mod tables {
    pub const JOURNEYS: &str = "travel_footprints";
    pub const EXPENSES: &str = "expenses";
    pub const WISHLIST: &str = "wishlist";
}
