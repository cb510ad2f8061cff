//! Amenity repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::amenity::Amenity;
use crate::errors::DomainError;

/// Repository trait for Amenity entity persistence operations
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    /// Find an amenity by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError>;

    /// List all amenities
    async fn find_all(&self) -> Result<Vec<Amenity>, DomainError>;

    /// Persist a new amenity
    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError>;

    /// Update an existing amenity
    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError>;

    /// Delete an amenity, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
