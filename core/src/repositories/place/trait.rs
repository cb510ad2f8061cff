//! Place repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::place::Place;
use crate::errors::DomainError;

/// Repository trait for Place entity persistence operations
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find a place by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError>;

    /// List all places
    async fn find_all(&self) -> Result<Vec<Place>, DomainError>;

    /// Persist a new place
    async fn create(&self, place: Place) -> Result<Place, DomainError>;

    /// Update an existing place
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No place with the given id
    async fn update(&self, place: Place) -> Result<Place, DomainError>;

    /// Delete a place, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
