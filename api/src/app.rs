//! Application factory
//!
//! Builds the actix-web application from a prepared `AppState`: middleware,
//! the `/api/v1` route table with per-route JWT protection, and the default
//! handlers.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{amenities, auth, places, reviews, users, AppState};

use hs_core::repositories::{
    AmenityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, R, A, L>(
    app_state: web::Data<AppState<U, P, R, A, L>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
    A: AmenityRepository + 'static,
    L: PlaceAmenityRepository + 'static,
{
    let token_service = app_state.token_service.clone();
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::login::<U, P, R, A, L>))
                        .route(
                            "/refresh",
                            web::post().to(auth::refresh::refresh::<U, P, R, A, L>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list_users::<U, P, R, A, L>))
                        .route("", web::post().to(users::create_user::<U, P, R, A, L>))
                        .route(
                            "/{user_id}",
                            web::get().to(users::get_user::<U, P, R, A, L>),
                        )
                        .route(
                            "/{user_id}",
                            web::put()
                                .to(users::update_user::<U, P, R, A, L>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        ),
                )
                .service(
                    web::scope("/places")
                        .route("", web::get().to(places::list_places::<U, P, R, A, L>))
                        .route("", web::post().to(places::create_place::<U, P, R, A, L>))
                        .route(
                            "/{place_id}",
                            web::get().to(places::get_place::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}",
                            web::put().to(places::update_place::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}",
                            web::delete().to(places::delete_place::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}/reviews",
                            web::get().to(places::list_place_reviews::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}/amenities",
                            web::get().to(places::list_place_amenities::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}/amenities",
                            web::post().to(places::add_place_amenity::<U, P, R, A, L>),
                        )
                        .route(
                            "/{place_id}/amenities/{amenity_id}",
                            web::delete().to(places::remove_place_amenity::<U, P, R, A, L>),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .route("", web::get().to(reviews::list_reviews::<U, P, R, A, L>))
                        .route(
                            "",
                            web::post()
                                .to(reviews::create_review::<U, P, R, A, L>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        )
                        .route(
                            "/{review_id}",
                            web::get().to(reviews::get_review::<U, P, R, A, L>),
                        )
                        .route(
                            "/{review_id}",
                            web::put()
                                .to(reviews::update_review::<U, P, R, A, L>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        )
                        .route(
                            "/{review_id}",
                            web::delete()
                                .to(reviews::delete_review::<U, P, R, A, L>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        ),
                )
                .service(
                    web::scope("/amenities")
                        .route("", web::get().to(amenities::list_amenities::<U, P, R, A, L>))
                        .route(
                            "",
                            web::post().to(amenities::create_amenity::<U, P, R, A, L>),
                        )
                        .route(
                            "/{amenity_id}",
                            web::get().to(amenities::get_amenity::<U, P, R, A, L>),
                        )
                        .route(
                            "/{amenity_id}",
                            web::put().to(amenities::update_amenity::<U, P, R, A, L>),
                        )
                        .route(
                            "/{amenity_id}",
                            web::delete().to(amenities::delete_amenity::<U, P, R, A, L>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "homestay-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
