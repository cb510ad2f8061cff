//! Review route handlers.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::dto::review::{CreateReviewRequest, UpdateReviewRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::AppState;

/// Handler for GET /api/v1/reviews
pub async fn list_reviews<U, P, R, A, L>(state: web::Data<AppState<U, P, R, A, L>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.review_service.list().await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/reviews
///
/// Requires authentication. Whatever `user_id` the payload claims, the
/// stored review is authored by the authenticated actor; owners cannot
/// review their own place, and one review per place is enforced.
pub async fn create_review<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .review_service
        .create(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(review) => HttpResponse::Created().json(review),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/reviews/{review_id}
pub async fn get_review<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.review_service.get(path.into_inner()).await {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/reviews/{review_id}
///
/// Author-only; a foreign actor gets a 403 distinct from the 404 of an
/// unknown review.
pub async fn update_review<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateReviewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .review_service
        .update(path.into_inner(), auth.user_id, request.into_inner().into())
        .await
    {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/reviews/{review_id}
pub async fn delete_review<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .review_service
        .delete(path.into_inner(), auth.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Review deleted successfully" })),
        Err(error) => handle_domain_error(error),
    }
}
