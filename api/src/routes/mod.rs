//! Route handlers and shared application state.

pub mod amenities;
pub mod auth;
pub mod places;
pub mod reviews;
pub mod users;

use std::sync::Arc;

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};
use hs_core::services::amenities::AmenityService;
use hs_core::services::auth::AuthService;
use hs_core::services::places::PlaceService;
use hs_core::services::reviews::ReviewService;
use hs_core::services::token::TokenService;
use hs_core::services::users::UserService;

/// Application state shared by every handler
///
/// Built once at startup by the composition root and cloned into the app
/// factory; all services are held by value and share their repositories
/// through `Arc`.
pub struct AppState<U, P, R, A, L>
where
    U: UserRepository,
    P: PlaceRepository,
    R: ReviewRepository,
    A: AmenityRepository,
    L: PlaceAmenityRepository,
{
    pub user_service: UserService<U>,
    pub place_service: PlaceService<P, U, A, L>,
    pub review_service: ReviewService<R, P>,
    pub amenity_service: AmenityService<A>,
    pub auth_service: AuthService<U>,
    pub token_service: Arc<TokenService>,
}
