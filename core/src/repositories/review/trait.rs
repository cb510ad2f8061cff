//! Review repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

/// Repository trait for Review entity persistence operations
///
/// The storage layer enforces one review per (user, place) pair; `create`
/// must fail if a review by the same user for the same place already exists,
/// even when two requests race past the application-level check.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// List all reviews
    async fn find_all(&self) -> Result<Vec<Review>, DomainError>;

    /// List all reviews for a place
    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError>;

    /// Find the review a user wrote for a place, if any
    async fn find_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, DomainError>;

    /// Persist a new review
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - The user already reviewed the place
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// Update an existing review
    async fn update(&self, review: Review) -> Result<Review, DomainError>;

    /// Delete a review, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
