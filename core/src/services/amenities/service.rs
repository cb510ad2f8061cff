//! Amenity service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::amenity::Amenity;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AmenityRepository;

/// Input for amenity creation
#[derive(Debug, Clone)]
pub struct NewAmenity {
    pub name: String,
}

/// Partial input for an amenity update
#[derive(Debug, Clone, Default)]
pub struct UpdateAmenity {
    pub name: Option<String>,
}

/// Service exposing amenity CRUD operations
pub struct AmenityService<A>
where
    A: AmenityRepository,
{
    amenity_repository: Arc<A>,
}

impl<A> AmenityService<A>
where
    A: AmenityRepository,
{
    /// Create a new amenity service
    pub fn new(amenity_repository: Arc<A>) -> Self {
        Self { amenity_repository }
    }

    /// Create an amenity
    pub async fn create(&self, input: NewAmenity) -> DomainResult<Amenity> {
        let amenity = Amenity::new(input.name)?;
        self.amenity_repository.create(amenity).await
    }

    /// Fetch an amenity by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Amenity> {
        self.amenity_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Amenity"))
    }

    /// List all amenities
    pub async fn list(&self) -> DomainResult<Vec<Amenity>> {
        self.amenity_repository.find_all().await
    }

    /// Update an amenity; only supplied fields change
    pub async fn update(&self, id: Uuid, input: UpdateAmenity) -> DomainResult<Amenity> {
        let mut amenity = self.get(id).await?;

        if let Some(name) = input.name {
            amenity.set_name(name)?;
        }

        self.amenity_repository.update(amenity).await
    }

    /// Delete an amenity
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.amenity_repository.delete(id).await? {
            return Err(DomainError::not_found("Amenity"));
        }
        Ok(())
    }
}
