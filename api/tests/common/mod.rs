//! Shared fixtures for the API integration tests: a mock-backed application
//! state and small request helpers.
#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use serde_json::Value;

use hs_api::AppState;
use hs_core::repositories::{
    MockAmenityRepository, MockPlaceAmenityRepository, MockPlaceRepository, MockReviewRepository,
    MockUserRepository,
};
use hs_core::services::amenities::AmenityService;
use hs_core::services::auth::AuthService;
use hs_core::services::password::PasswordHasher;
use hs_core::services::places::PlaceService;
use hs_core::services::reviews::ReviewService;
use hs_core::services::token::{TokenService, TokenServiceConfig};
use hs_core::services::users::UserService;

pub type MockState = AppState<
    MockUserRepository,
    MockPlaceRepository,
    MockReviewRepository,
    MockAmenityRepository,
    MockPlaceAmenityRepository,
>;

/// Build an application state wired entirely to in-memory repositories
pub fn test_state() -> web::Data<MockState> {
    let user_repository = Arc::new(MockUserRepository::new());
    let place_repository = Arc::new(MockPlaceRepository::new());
    let review_repository = Arc::new(MockReviewRepository::new());
    let amenity_repository = Arc::new(MockAmenityRepository::new());
    let link_repository = Arc::new(MockPlaceAmenityRepository::new());

    // MIN_COST keeps the suite fast; the contract is unchanged
    let password_hasher = Arc::new(PasswordHasher::with_cost(bcrypt::MIN_COST));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..TokenServiceConfig::default()
    }));

    web::Data::new(AppState {
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
    })
}

pub async fn get<S, B>(app: &S, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(
        app,
        test::TestRequest::post()
            .uri(uri)
            .set_json(&body)
            .to_request(),
    )
    .await
}

pub async fn post_json_auth<S, B>(
    app: &S,
    uri: &str,
    token: &str,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(
        app,
        test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&body)
            .to_request(),
    )
    .await
}

pub async fn put_json_auth<S, B>(
    app: &S,
    uri: &str,
    token: &str,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(
        app,
        test::TestRequest::put()
            .uri(uri)
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&body)
            .to_request(),
    )
    .await
}

pub async fn put_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(
        app,
        test::TestRequest::put()
            .uri(uri)
            .set_json(&body)
            .to_request(),
    )
    .await
}

pub async fn delete<S, B>(app: &S, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(app, test::TestRequest::delete().uri(uri).to_request()).await
}

pub async fn delete_auth<S, B>(app: &S, uri: &str, token: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    test::call_service(
        app,
        test::TestRequest::delete()
            .uri(uri)
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await
}

/// Register a user and return its JSON representation
pub async fn register_user<S, B>(app: &S, first_name: &str, email: &str, password: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody + Unpin,
{
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({
            "first_name": first_name,
            "last_name": "Tester",
            "email": email,
            "password": password,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "user registration failed");
    test::read_body_json(response).await
}

/// Log a user in and return the auth payload (tokens + user_id)
pub async fn login<S, B>(app: &S, email: &str, password: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody + Unpin,
{
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 200, "login failed");
    test::read_body_json(response).await
}
