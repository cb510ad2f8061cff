//! Mock implementation of PlaceRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::place::Place;
use crate::errors::DomainError;

use super::trait_::PlaceRepository;

/// Mock place repository for testing
pub struct MockPlaceRepository {
    places: Arc<RwLock<HashMap<Uuid, Place>>>,
}

impl MockPlaceRepository {
    pub fn new() -> Self {
        Self {
            places: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockPlaceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceRepository for MockPlaceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let places = self.places.read().await;
        Ok(places.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Place>, DomainError> {
        let places = self.places.read().await;
        Ok(places.values().cloned().collect())
    }

    async fn create(&self, place: Place) -> Result<Place, DomainError> {
        let mut places = self.places.write().await;
        places.insert(place.id, place.clone());
        Ok(place)
    }

    async fn update(&self, place: Place) -> Result<Place, DomainError> {
        let mut places = self.places.write().await;

        if !places.contains_key(&place.id) {
            return Err(DomainError::not_found("Place"));
        }

        places.insert(place.id, place.clone());
        Ok(place)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut places = self.places.write().await;
        Ok(places.remove(&id).is_some())
    }
}
