//! HomeStay API server entry point
//!
//! Loads configuration from the environment, wires the MySQL repositories
//! into the core services, and serves the actix-web application.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use hs_api::{create_app, AppState};
use hs_core::services::amenities::AmenityService;
use hs_core::services::auth::AuthService;
use hs_core::services::password::PasswordHasher;
use hs_core::services::places::PlaceService;
use hs_core::services::reviews::ReviewService;
use hs_core::services::token::{TokenService, TokenServiceConfig};
use hs_core::services::users::UserService;
use hs_infra::{
    create_pool, MySqlAmenityRepository, MySqlPlaceAmenityRepository, MySqlPlaceRepository,
    MySqlReviewRepository, MySqlUserRepository,
};
use hs_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting HomeStay API Server");

    let config = AppConfig::from_env();

    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is unset; using the default secret in production is unsafe");
    }

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let place_repository = Arc::new(MySqlPlaceRepository::new(pool.clone()));
    let review_repository = Arc::new(MySqlReviewRepository::new(pool.clone()));
    let amenity_repository = Arc::new(MySqlAmenityRepository::new(pool.clone()));
    let link_repository = Arc::new(MySqlPlaceAmenityRepository::new(pool));

    // Shared credential and token services, constructed once at startup
    let password_hasher = Arc::new(PasswordHasher::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        config.jwt.clone(),
    )));

    let app_state = web::Data::new(AppState {
        user_service: UserService::new(user_repository.clone(), password_hasher.clone()),
        place_service: PlaceService::new(
            place_repository.clone(),
            user_repository.clone(),
            amenity_repository.clone(),
            link_repository.clone(),
        ),
        review_service: ReviewService::new(review_repository, place_repository),
        amenity_service: AmenityService::new(amenity_repository),
        auth_service: AuthService::new(user_repository, password_hasher, token_service.clone()),
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
