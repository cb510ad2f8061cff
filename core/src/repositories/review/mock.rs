//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

use super::trait_::ReviewRepository;

/// Mock review repository for testing
///
/// Mirrors the database's UNIQUE (user_id, place_id) constraint in `create`.
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.values().cloned().collect())
    }

    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .find(|r| r.user_id == user_id && r.place_id == place_id)
            .cloned())
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if reviews
            .values()
            .any(|r| r.user_id == review.user_id && r.place_id == review.place_id)
        {
            return Err(DomainError::validation(
                "You have already reviewed this place.",
            ));
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if !reviews.contains_key(&review.id) {
            return Err(DomainError::not_found("Review"));
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn uniqueness_per_user_and_place() {
        let repo = MockReviewRepository::new();
        let user = Uuid::new_v4();
        let place = Uuid::new_v4();

        repo.create(Review::new("nice", 5, user, place).unwrap())
            .await
            .unwrap();
        let dup = repo
            .create(Review::new("again", 4, user, place).unwrap())
            .await;
        assert!(matches!(dup, Err(DomainError::Validation { .. })));

        // A different user may review the same place
        let other = Review::new("fine", 3, Uuid::new_v4(), place).unwrap();
        assert!(repo.create(other).await.is_ok());
    }

    #[tokio::test]
    async fn lookup_by_place_and_pair() {
        let repo = MockReviewRepository::new();
        let user = Uuid::new_v4();
        let place = Uuid::new_v4();
        repo.create(Review::new("nice", 5, user, place).unwrap())
            .await
            .unwrap();

        assert_eq!(repo.find_by_place(place).await.unwrap().len(), 1);
        assert!(repo
            .find_by_user_and_place(user, place)
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_user_and_place(user, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }
}
