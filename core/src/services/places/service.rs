//! Place service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::amenity::Amenity;
use crate::domain::entities::place::Place;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, UserRepository,
};

/// Input for place creation
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
}

/// Partial input for a place update
#[derive(Debug, Clone, Default)]
pub struct UpdatePlace {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Service exposing place CRUD and amenity-association operations
///
/// No ownership rule guards place mutation: the observed surface applies
/// none, and that gap is preserved rather than silently closed (see
/// DESIGN.md).
pub struct PlaceService<P, U, A, L>
where
    P: PlaceRepository,
    U: UserRepository,
    A: AmenityRepository,
    L: PlaceAmenityRepository,
{
    place_repository: Arc<P>,
    user_repository: Arc<U>,
    amenity_repository: Arc<A>,
    link_repository: Arc<L>,
}

impl<P, U, A, L> PlaceService<P, U, A, L>
where
    P: PlaceRepository,
    U: UserRepository,
    A: AmenityRepository,
    L: PlaceAmenityRepository,
{
    /// Create a new place service
    pub fn new(
        place_repository: Arc<P>,
        user_repository: Arc<U>,
        amenity_repository: Arc<A>,
        link_repository: Arc<L>,
    ) -> Self {
        Self {
            place_repository,
            user_repository,
            amenity_repository,
            link_repository,
        }
    }

    /// Create a place
    ///
    /// The owner reference must resolve to an existing user; an unknown
    /// owner is a validation failure on the input payload.
    pub async fn create(&self, input: NewPlace) -> DomainResult<Place> {
        if self
            .user_repository
            .find_by_id(input.owner_id)
            .await?
            .is_none()
        {
            return Err(DomainError::validation("Owner not found"));
        }

        let place = Place::new(
            input.title,
            input.description,
            input.price,
            input.latitude,
            input.longitude,
            input.owner_id,
        )?;

        self.place_repository.create(place).await
    }

    /// Fetch a place by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Place> {
        self.place_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Place"))
    }

    /// List all places
    pub async fn list(&self) -> DomainResult<Vec<Place>> {
        self.place_repository.find_all().await
    }

    /// Update a place; only supplied fields change, each re-validated
    pub async fn update(&self, id: Uuid, input: UpdatePlace) -> DomainResult<Place> {
        let mut place = self.get(id).await?;

        if let Some(title) = input.title {
            place.set_title(title)?;
        }
        if let Some(description) = input.description {
            place.set_description(Some(description));
        }
        if let Some(price) = input.price {
            place.set_price(price)?;
        }
        if let Some(latitude) = input.latitude {
            place.set_latitude(latitude)?;
        }
        if let Some(longitude) = input.longitude {
            place.set_longitude(longitude)?;
        }

        self.place_repository.update(place).await
    }

    /// Delete a place and its amenity associations
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.place_repository.delete(id).await? {
            return Err(DomainError::not_found("Place"));
        }
        self.link_repository.unlink_all_for_place(id).await
    }

    /// Associate an amenity with a place
    pub async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> DomainResult<()> {
        self.get(place_id).await?;
        if self
            .amenity_repository
            .find_by_id(amenity_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("Amenity"));
        }

        self.link_repository.link(place_id, amenity_id).await
    }

    /// Remove an amenity association from a place
    pub async fn remove_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> DomainResult<()> {
        self.get(place_id).await?;
        if !self.link_repository.unlink(place_id, amenity_id).await? {
            return Err(DomainError::not_found("Amenity association"));
        }
        Ok(())
    }

    /// List the amenities associated with a place
    pub async fn list_amenities(&self, place_id: Uuid) -> DomainResult<Vec<Amenity>> {
        self.get(place_id).await?;

        let ids = self.link_repository.amenities_for_place(place_id).await?;
        let mut amenities = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(amenity) = self.amenity_repository.find_by_id(id).await? {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }
}
