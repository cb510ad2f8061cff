use serde::Deserialize;
use uuid::Uuid;

use hs_core::services::reviews::{NewReview, UpdateReview};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i32,
    pub place_id: Uuid,
    /// Accepted on the wire but ignored: the stored author is always the
    /// authenticated actor
    pub user_id: Option<Uuid>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        Self {
            text: request.text,
            rating: request.rating,
            place_id: request.place_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl From<UpdateReviewRequest> for UpdateReview {
    fn from(request: UpdateReviewRequest) -> Self {
        Self {
            text: request.text,
            rating: request.rating,
        }
    }
}
