//! Journey Entity
//!
//! A visited location. Immutable once recorded; only its owner can delete it.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{JourneyId, UserId};

use super::required_text;
use crate::error::TravelResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: JourneyId,
    pub owner_id: UserId,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new journey
#[derive(Debug, Clone)]
pub struct JourneyDraft {
    location: String,
    date: NaiveDate,
    description: String,
}

impl JourneyDraft {
    pub fn new(location: String, date: NaiveDate, description: String) -> TravelResult<Self> {
        Ok(Self {
            location: required_text("location", location)?,
            date,
            description: description.trim().to_string(),
        })
    }

    pub fn into_journey(self, owner_id: UserId) -> Journey {
        Journey {
            id: JourneyId::new(),
            owner_id,
            location: self.location,
            date: self.date,
            description: self.description,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravelError;

    #[test]
    fn test_blank_location_is_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let err = JourneyDraft::new("   ".into(), date, "".into()).unwrap_err();
        assert!(matches!(err, TravelError::Validation(msg) if msg == "location is required"));
    }

    #[test]
    fn test_into_journey_assigns_owner_and_id() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let owner = UserId::new();
        let journey = JourneyDraft::new(" Kyoto ".into(), date, "Temples".into())
            .unwrap()
            .into_journey(owner);

        assert_eq!(journey.owner_id, owner);
        assert_eq!(journey.location, "Kyoto");
        assert_eq!(journey.description, "Temples");
    }
}
