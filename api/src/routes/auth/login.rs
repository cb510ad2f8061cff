use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates an email/password pair and returns an access token, a
/// refresh token, and the user id. Missing fields are a 400; bad
/// credentials are a 401 with a deliberately generic message.
pub async fn login<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
