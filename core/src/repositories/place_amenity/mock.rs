//! Mock implementation of PlaceAmenityRepository for testing

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::trait_::PlaceAmenityRepository;

/// Mock place-amenity association repository for testing
pub struct MockPlaceAmenityRepository {
    links: Arc<RwLock<HashSet<(Uuid, Uuid)>>>,
}

impl MockPlaceAmenityRepository {
    pub fn new() -> Self {
        Self {
            links: Arc::new(RwLock::new(HashSet::new())),
        }
    }
}

impl Default for MockPlaceAmenityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceAmenityRepository for MockPlaceAmenityRepository {
    async fn link(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError> {
        let mut links = self.links.write().await;
        if !links.insert((place_id, amenity_id)) {
            return Err(DomainError::validation(
                "Amenity is already linked to this place",
            ));
        }
        Ok(())
    }

    async fn unlink(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError> {
        let mut links = self.links.write().await;
        Ok(links.remove(&(place_id, amenity_id)))
    }

    async fn contains(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError> {
        let links = self.links.read().await;
        Ok(links.contains(&(place_id, amenity_id)))
    }

    async fn amenities_for_place(&self, place_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .filter(|(p, _)| *p == place_id)
            .map(|(_, a)| *a)
            .collect())
    }

    async fn unlink_all_for_place(&self, place_id: Uuid) -> Result<(), DomainError> {
        let mut links = self.links.write().await;
        links.retain(|(p, _)| *p != place_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn link_is_unique_and_queryable() {
        let repo = MockPlaceAmenityRepository::new();
        let place = Uuid::new_v4();
        let amenity = Uuid::new_v4();

        repo.link(place, amenity).await.unwrap();
        assert!(repo.link(place, amenity).await.is_err());
        assert!(repo.contains(place, amenity).await.unwrap());
        assert_eq!(repo.amenities_for_place(place).await.unwrap(), vec![amenity]);

        assert!(repo.unlink(place, amenity).await.unwrap());
        assert!(!repo.unlink(place, amenity).await.unwrap());
    }
}
