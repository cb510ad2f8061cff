//! User route handlers.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::AppState;

/// Handler for GET /api/v1/users
pub async fn list_users<U, P, R, A, L>(state: web::Data<AppState<U, P, R, A, L>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.user_service.list().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/users
///
/// Registers a user. The response never carries the password or its digest.
pub async fn create_user<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state.user_service.create(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/{user_id}
pub async fn get_user<U, P, R, A, L>(
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
    match state.user_service.get(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{user_id}
///
/// Requires authentication; only the user themselves may update, and the
/// payload may not carry `email` or `password`.
pub async fn update_user<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    match state
        .user_service
        .update(path.into_inner(), auth.user_id, request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
