//! Review entity representing a user's review of a place.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use hs_shared::utils::validation;

/// Review entity
///
/// A review always references both its author and its target place. Those
/// references are fixed at creation; only the text and rating can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,

    /// Review text
    pub text: String,

    /// Rating from 1 to 5
    pub rating: i32,

    /// Reference to the authoring user
    pub user_id: Uuid,

    /// Reference to the reviewed place
    pub place_id: Uuid,

    /// Timestamp when the review was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the review was last updated
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new Review, validating text and rating
    pub fn new(
        text: impl Into<String>,
        rating: i32,
        user_id: Uuid,
        place_id: Uuid,
    ) -> DomainResult<Self> {
        let text = text.into();
        Self::validate_text(&text)?;
        Self::validate_rating(rating)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            rating,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate review text: non-empty after trimming
    pub fn validate_text(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) {
            return Err(DomainError::validation("Review content cannot be empty"));
        }
        Ok(())
    }

    /// Validate a rating: integer between 1 and 5 inclusive
    pub fn validate_rating(value: i32) -> DomainResult<()> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::validation(
                "Rating must be an integer between 1 and 5",
            ));
        }
        Ok(())
    }

    /// Sets the text, re-running validation
    pub fn set_text(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        Self::validate_text(&value)?;
        self.text = value;
        self.touch();
        Ok(())
    }

    /// Sets the rating, re-running validation
    pub fn set_rating(&mut self, value: i32) -> DomainResult<()> {
        Self::validate_rating(value)?;
        self.rating = value;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_review_holds_references() {
        let user = Uuid::new_v4();
        let place = Uuid::new_v4();
        let review = Review::new("Great stay", 5, user, place).unwrap();
        assert_eq!(review.user_id, user);
        assert_eq!(review.place_id, place);
    }

    #[test]
    fn rejects_blank_text() {
        let id = Uuid::new_v4();
        assert!(Review::new("", 3, id, id).is_err());
        assert!(Review::new("   \n", 3, id, id).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        let id = Uuid::new_v4();
        assert!(Review::new("ok", 1, id, id).is_ok());
        assert!(Review::new("ok", 5, id, id).is_ok());
        assert!(Review::new("ok", 0, id, id).is_err());
        assert!(Review::new("ok", 6, id, id).is_err());
        assert!(Review::new("ok", -1, id, id).is_err());
    }

    #[test]
    fn setters_validate() {
        let id = Uuid::new_v4();
        let mut review = Review::new("ok", 3, id, id).unwrap();
        assert!(review.set_rating(6).is_err());
        assert_eq!(review.rating, 3);
        review.set_rating(4).unwrap();
        assert_eq!(review.rating, 4);
        assert!(review.set_text("").is_err());
    }
}
