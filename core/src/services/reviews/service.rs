//! Review service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PlaceRepository, ReviewRepository};
use crate::services::authorization;

/// Input for review creation
///
/// There is deliberately no author field: the author is always the
/// authenticated actor, whatever the request payload claimed.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub text: String,
    pub rating: i32,
    pub place_id: Uuid,
}

/// Partial input for a review update
#[derive(Debug, Clone, Default)]
pub struct UpdateReview {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

/// Service exposing review CRUD operations
pub struct ReviewService<R, P>
where
    R: ReviewRepository,
    P: PlaceRepository,
{
    review_repository: Arc<R>,
    place_repository: Arc<P>,
}

impl<R, P> ReviewService<R, P>
where
    R: ReviewRepository,
    P: PlaceRepository,
{
    /// Create a new review service
    pub fn new(review_repository: Arc<R>, place_repository: Arc<P>) -> Self {
        Self {
            review_repository,
            place_repository,
        }
    }

    /// Create a review as the authenticated actor
    ///
    /// Resolves the target place, rejects the place's owner, rejects a
    /// second review for the same (actor, place) pair, then validates the
    /// content. The stored `user_id` is the actor's id.
    pub async fn create(&self, actor: Uuid, input: NewReview) -> DomainResult<Review> {
        let place = self
            .place_repository
            .find_by_id(input.place_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Place"))?;

        authorization::ensure_not_own_place(actor, place.owner_id)?;

        if self
            .review_repository
            .find_by_user_and_place(actor, input.place_id)
            .await?
            .is_some()
        {
            return Err(DomainError::validation(
                "You have already reviewed this place.",
            ));
        }

        let review = Review::new(input.text, input.rating, actor, input.place_id)?;
        self.review_repository.create(review).await
    }

    /// Fetch a review by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Review> {
        self.review_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))
    }

    /// List all reviews
    pub async fn list(&self) -> DomainResult<Vec<Review>> {
        self.review_repository.find_all().await
    }

    /// List the reviews of a place
    pub async fn list_for_place(&self, place_id: Uuid) -> DomainResult<Vec<Review>> {
        if self
            .place_repository
            .find_by_id(place_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("Place"));
        }
        self.review_repository.find_by_place(place_id).await
    }

    /// Update a review; author-only, partial merge
    ///
    /// Existence (404) is checked before authorship (403), before content
    /// validation (400).
    pub async fn update(
        &self,
        id: Uuid,
        actor: Uuid,
        input: UpdateReview,
    ) -> DomainResult<Review> {
        let mut review = self.get(id).await?;

        authorization::ensure_review_author(actor, review.user_id)?;

        if let Some(text) = input.text {
            review.set_text(text)?;
        }
        if let Some(rating) = input.rating {
            review.set_rating(rating)?;
        }

        self.review_repository.update(review).await
    }

    /// Delete a review; author-only
    pub async fn delete(&self, id: Uuid, actor: Uuid) -> DomainResult<()> {
        let review = self.get(id).await?;

        authorization::ensure_review_author(actor, review.user_id)?;

        self.review_repository.delete(id).await?;
        Ok(())
    }
}
