//! Mock implementation of AmenityRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::amenity::Amenity;
use crate::errors::DomainError;

use super::trait_::AmenityRepository;

/// Mock amenity repository for testing
pub struct MockAmenityRepository {
    amenities: Arc<RwLock<HashMap<Uuid, Amenity>>>,
}

impl MockAmenityRepository {
    pub fn new() -> Self {
        Self {
            amenities: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockAmenityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AmenityRepository for MockAmenityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError> {
        let amenities = self.amenities.read().await;
        Ok(amenities.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Amenity>, DomainError> {
        let amenities = self.amenities.read().await;
        Ok(amenities.values().cloned().collect())
    }

    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let mut amenities = self.amenities.write().await;
        amenities.insert(amenity.id, amenity.clone());
        Ok(amenity)
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let mut amenities = self.amenities.write().await;

        if !amenities.contains_key(&amenity.id) {
            return Err(DomainError::not_found("Amenity"));
        }

        amenities.insert(amenity.id, amenity.clone());
        Ok(amenity)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut amenities = self.amenities.write().await;
        Ok(amenities.remove(&id).is_some())
    }
}
