use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

use super::super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a fresh access token.
pub async fn refresh<U, P, R, A, L>(
    state: web::Data<AppState<U, P, R, A, L>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
