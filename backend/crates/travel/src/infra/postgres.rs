//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{DestinationId, ExpenseId, JourneyId, UserId, WishlistItemId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repository::{
    DestinationRepository, ExpenseRepository, JourneyRepository, WishlistRepository,
};
use crate::domain::{Destination, Expense, Journey, Priority, WishlistItem};
use crate::error::{TravelError, TravelResult};

/// PostgreSQL-backed store for every travel table
#[derive(Clone)]
pub struct PgTravelRepository {
    pool: PgPool,
}

impl PgTravelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Journeys (travel_footprints)
// ============================================================================

impl JourneyRepository for PgTravelRepository {
    async fn list_journeys(&self, owner: UserId) -> TravelResult<Vec<Journey>> {
        let rows = sqlx::query_as::<_, JourneyRow>(
            r#"
            SELECT id, user_id, location, date, description, created_at
            FROM travel_footprints
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JourneyRow::into_journey).collect())
    }

    async fn find_journey(&self, owner: UserId, id: JourneyId) -> TravelResult<Option<Journey>> {
        let row = sqlx::query_as::<_, JourneyRow>(
            r#"
            SELECT id, user_id, location, date, description, created_at
            FROM travel_footprints
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JourneyRow::into_journey))
    }

    async fn insert_journey(&self, journey: &Journey) -> TravelResult<()> {
        sqlx::query(
            r#"
            INSERT INTO travel_footprints (id, user_id, location, date, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(journey.id.as_uuid())
        .bind(journey.owner_id.as_uuid())
        .bind(&journey.location)
        .bind(journey.date)
        .bind(&journey.description)
        .bind(journey.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_journey(&self, owner: UserId, id: JourneyId) -> TravelResult<bool> {
        let result = sqlx::query("DELETE FROM travel_footprints WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Expenses
// ============================================================================

impl ExpenseRepository for PgTravelRepository {
    async fn list_expenses(&self, owner: UserId) -> TravelResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, user_id, location, amount, date, category, note, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ExpenseRow::into_expense).collect()
    }

    async fn find_expense(&self, owner: UserId, id: ExpenseId) -> TravelResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, user_id, location, amount, date, category, note, created_at
            FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExpenseRow::into_expense).transpose()
    }

    async fn insert_expense(&self, expense: &Expense) -> TravelResult<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, user_id, location, amount, date, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(expense.id.as_uuid())
        .bind(expense.owner_id.as_uuid())
        .bind(&expense.location)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(expense.category.as_str())
        .bind(expense.note.as_deref())
        .bind(expense.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_expense(&self, expense: &Expense) -> TravelResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET location = $3, amount = $4, date = $5, category = $6, note = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(expense.id.as_uuid())
        .bind(expense.owner_id.as_uuid())
        .bind(&expense.location)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(expense.category.as_str())
        .bind(expense.note.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expense(&self, owner: UserId, id: ExpenseId) -> TravelResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Wishlist
// ============================================================================

impl WishlistRepository for PgTravelRepository {
    async fn list_wishlist(&self, owner: UserId) -> TravelResult<Vec<WishlistItem>> {
        let rows = sqlx::query_as::<_, WishlistRow>(
            r#"
            SELECT id, user_id, location, planned_date, reason, priority, budget, status, created_at
            FROM wishlist
            WHERE user_id = $1
            ORDER BY priority DESC, created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WishlistRow::into_item).collect()
    }

    async fn find_wishlist_item(
        &self,
        owner: UserId,
        id: WishlistItemId,
    ) -> TravelResult<Option<WishlistItem>> {
        let row = sqlx::query_as::<_, WishlistRow>(
            r#"
            SELECT id, user_id, location, planned_date, reason, priority, budget, status, created_at
            FROM wishlist
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WishlistRow::into_item).transpose()
    }

    async fn insert_wishlist_item(&self, item: &WishlistItem) -> TravelResult<()> {
        sqlx::query(
            r#"
            INSERT INTO wishlist (
                id, user_id, location, planned_date, reason, priority, budget, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.owner_id.as_uuid())
        .bind(&item.location)
        .bind(item.planned_date)
        .bind(&item.reason)
        .bind(i16::from(item.priority.value()))
        .bind(item.budget.as_deref())
        .bind(item.status.as_str())
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_wishlist_item(&self, item: &WishlistItem) -> TravelResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE wishlist
            SET location = $3, planned_date = $4, reason = $5, priority = $6, budget = $7, status = $8
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.owner_id.as_uuid())
        .bind(&item.location)
        .bind(item.planned_date)
        .bind(&item.reason)
        .bind(i16::from(item.priority.value()))
        .bind(item.budget.as_deref())
        .bind(item.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_wishlist_item(&self, owner: UserId, id: WishlistItemId) -> TravelResult<bool> {
        let result = sqlx::query("DELETE FROM wishlist WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Destinations (read-only catalog)
// ============================================================================

impl DestinationRepository for PgTravelRepository {
    async fn list_destinations(&self, category: Option<&str>) -> TravelResult<Vec<Destination>> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT
                d.id,
                d.name,
                d.country,
                d.description,
                d.best_season,
                d.budget_level,
                d.image_url,
                d.recommended_reason,
                string_agg(t.tag_name, ',' ORDER BY t.tag_name) AS tags
            FROM destinations d
            LEFT JOIN destination_tags t ON t.destination_id = d.id
            WHERE $1::text IS NULL
               OR d.id IN (SELECT destination_id FROM destination_tags WHERE tag_name = $1)
            GROUP BY d.id
            ORDER BY d.name
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DestinationRow::into_destination).collect()
    }

    async fn find_destination(&self, id: DestinationId) -> TravelResult<Option<Destination>> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT
                d.id,
                d.name,
                d.country,
                d.description,
                d.best_season,
                d.budget_level,
                d.image_url,
                d.recommended_reason,
                string_agg(t.tag_name, ',' ORDER BY t.tag_name) AS tags
            FROM destinations d
            LEFT JOIN destination_tags t ON t.destination_id = d.id
            WHERE d.id = $1
            GROUP BY d.id
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DestinationRow::into_destination).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct JourneyRow {
    id: Uuid,
    user_id: Uuid,
    location: String,
    date: NaiveDate,
    description: String,
    created_at: DateTime<Utc>,
}

impl JourneyRow {
    fn into_journey(self) -> Journey {
        Journey {
            id: JourneyId::from_uuid(self.id),
            owner_id: UserId::from_uuid(self.user_id),
            location: self.location,
            date: self.date,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    user_id: Uuid,
    location: String,
    amount: f64,
    date: NaiveDate,
    category: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> TravelResult<Expense> {
        Ok(Expense {
            id: ExpenseId::from_uuid(self.id),
            owner_id: UserId::from_uuid(self.user_id),
            location: self.location,
            amount: self.amount,
            date: self.date,
            category: self.category.parse()?,
            note: self.note,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct WishlistRow {
    id: Uuid,
    user_id: Uuid,
    location: String,
    planned_date: NaiveDate,
    reason: String,
    priority: i16,
    budget: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl WishlistRow {
    fn into_item(self) -> TravelResult<WishlistItem> {
        let priority = Priority::new(i64::from(self.priority)).map_err(|_| {
            TravelError::Internal(format!("stored priority {} is out of range", self.priority))
        })?;

        Ok(WishlistItem {
            id: WishlistItemId::from_uuid(self.id),
            owner_id: UserId::from_uuid(self.user_id),
            location: self.location,
            planned_date: self.planned_date,
            reason: self.reason,
            priority,
            budget: self.budget,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: Uuid,
    name: String,
    country: String,
    description: String,
    best_season: String,
    budget_level: String,
    image_url: String,
    recommended_reason: String,
    tags: Option<String>,
}

impl DestinationRow {
    fn into_destination(self) -> TravelResult<Destination> {
        Ok(Destination {
            id: DestinationId::from_uuid(self.id),
            name: self.name,
            country: self.country,
            description: self.description,
            best_season: self.best_season,
            budget_level: self.budget_level.parse()?,
            image_url: self.image_url,
            tags: split_tags(self.tags.as_deref()),
            recommended_reason: self.recommended_reason,
        })
    }
}

/// Split an aggregated `"Featured,Value"` column into trimmed labels.
/// Absent or empty input yields no tags.
fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert!(split_tags(None).is_empty());
        assert!(split_tags(Some("")).is_empty());
        assert_eq!(split_tags(Some("Featured")), vec!["Featured"]);
        assert_eq!(
            split_tags(Some("Featured, Seasonal,,Value")),
            vec!["Featured", "Seasonal", "Value"]
        );
    }
}
