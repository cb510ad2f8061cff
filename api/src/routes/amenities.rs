//! Amenity route handlers.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::dto::amenity::{CreateAmenityRequest, UpdateAmenityRequest};
use crate::handlers::handle_domain_error;

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::AppState;

/// Handler for GET /api/v1/amenities
pub async fn list_amenities<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.amenity_service.list().await {
        Ok(amenities) => HttpResponse::Ok().json(amenities),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/amenities
pub async fn create_amenity<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    request: web::Json<CreateAmenityRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .amenity_service
        .create(request.into_inner().into())
        .await
    {
        Ok(amenity) => HttpResponse::Created().json(amenity),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/amenities/{amenity_id}
pub async fn get_amenity<U, P, R, A, L>(
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
    match state.amenity_service.get(path.into_inner()).await {
        Ok(amenity) => HttpResponse::Ok().json(amenity),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/amenities/{amenity_id}
pub async fn update_amenity<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateAmenityRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .amenity_service
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(amenity) => HttpResponse::Ok().json(amenity),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/amenities/{amenity_id}
pub async fn delete_amenity<U, P, R, A, L>(
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
    match state.amenity_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Amenity deleted successfully" })),
        Err(error) => handle_domain_error(error),
    }
}
