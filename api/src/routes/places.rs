//! Place route handlers, including the amenity-association surface.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::dto::place::{AddAmenityRequest, CreatePlaceRequest, UpdatePlaceRequest};
use crate::handlers::handle_domain_error;

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::AppState;

/// Handler for GET /api/v1/places
pub async fn list_places<U, P, R, A, L>(state: web::Data<AppState<U, P, R, A, L>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.place_service.list().await {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/places
pub async fn create_place<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    request: web::Json<CreatePlaceRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.place_service.create(request.into_inner().into()).await {
        Ok(place) => HttpResponse::Created().json(place),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/places/{place_id}
pub async fn get_place<U, P, R, A, L>(
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
    match state.place_service.get(path.into_inner()).await {
        Ok(place) => HttpResponse::Ok().json(place),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/places/{place_id}
pub async fn update_place<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdatePlaceRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .place_service
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(place) => HttpResponse::Ok().json(place),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/places/{place_id}
pub async fn delete_place<U, P, R, A, L>(
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
    match state.place_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Place deleted successfully" })),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/places/{place_id}/reviews
pub async fn list_place_reviews<U, P, R, A, L>(
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
    match state.review_service.list_for_place(path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/places/{place_id}/amenities
pub async fn list_place_amenities<U, P, R, A, L>(
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
    match state.place_service.list_amenities(path.into_inner()).await {
        Ok(amenities) => HttpResponse::Ok().json(amenities),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/places/{place_id}/amenities
pub async fn add_place_amenity<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    path: web::Path<Uuid>,
    request: web::Json<AddAmenityRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .place_service
        .add_amenity(path.into_inner(), request.amenity_id)
        .await
    {
        Ok(()) => HttpResponse::Created().json(json!({ "message": "Amenity added to place" })),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/places/{place_id}/amenities/{amenity_id}
pub async fn remove_place_amenity<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    let (place_id, amenity_id) = path.into_inner();
    match state.place_service.remove_amenity(place_id, amenity_id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Amenity removed from place" })),
        Err(error) => handle_domain_error(error),
    }
}
