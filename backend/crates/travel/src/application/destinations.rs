//! Destination Service
//!
//! Public, read-only access to the catalog.

use std::sync::Arc;

use kernel::id::DestinationId;

use crate::domain::{Destination, DestinationRepository};
use crate::error::{TravelError, TravelResult};

pub struct DestinationService<R> {
    repo: Arc<R>,
}

impl<R> DestinationService<R>
where
    R: DestinationRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A blank category is treated as no filter
    pub async fn list(&self, category: Option<&str>) -> TravelResult<Vec<Destination>> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.repo.list_destinations(category).await
    }

    pub async fn get(&self, id: DestinationId) -> TravelResult<Destination> {
        self.repo
            .find_destination(id)
            .await?
            .ok_or(TravelError::NotFound("Destination"))
    }
}
