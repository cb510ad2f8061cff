//! Place-amenity association repository trait.
//!
//! The many-to-many relation between places and amenities is stored as an
//! explicit association table with its own operations; nothing is loaded
//! implicitly through either entity.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Repository trait for the place↔amenity association
#[async_trait]
pub trait PlaceAmenityRepository: Send + Sync {
    /// Associate an amenity with a place
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - The association already exists
    async fn link(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError>;

    /// Remove an association, returning whether it existed
    async fn unlink(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError>;

    /// Check whether an association exists
    async fn contains(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError>;

    /// List the amenity ids associated with a place
    async fn amenities_for_place(&self, place_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    /// Remove every association of a place (used when the place is deleted)
    async fn unlink_all_for_place(&self, place_id: Uuid) -> Result<(), DomainError>;
}
