//! Owner-only user updates and the credential-field rejection.

mod common;

use actix_web::test;
use serde_json::json;

use common::{login, put_json_auth, register_user, test_state};
use hs_api::create_app;

#[actix_web::test]
async fn owner_updates_own_profile() {
    let app = test::init_service(create_app(test_state())).await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let auth = login(&app, "a@x.com", "secret1").await;

    let uri = format!("/api/v1/users/{}", user["id"].as_str().unwrap());
    let response = put_json_auth(
        &app,
        &uri,
        auth["access_token"].as_str().unwrap(),
        json!({ "first_name": "Alicia" }),
    )
    .await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(updated["first_name"], "Alicia");
    // Unsupplied fields keep their prior values
    assert_eq!(updated["last_name"], "Tester");
    assert!(updated.get("password_hash").is_none());
}

#[actix_web::test]
async fn credential_fields_in_the_payload_are_rejected() {
    let app = test::init_service(create_app(test_state())).await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let auth = login(&app, "a@x.com", "secret1").await;
    let token = auth["access_token"].as_str().unwrap();
    let uri = format!("/api/v1/users/{}", user["id"].as_str().unwrap());

    // Even the unchanged current value is refused
    let response = put_json_auth(&app, &uri, token, json!({ "email": "a@x.com" })).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "You cannot modify email or password.");

    let response = put_json_auth(&app, &uri, token, json!({ "password": "secret1" })).await;
    assert_eq!(response.status(), 400);

    // The combination with a legitimate field is still refused outright
    let response = put_json_auth(
        &app,
        &uri,
        token,
        json!({ "first_name": "Alicia", "email": "other@x.com" }),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[actix_web::test]
async fn foreign_actor_gets_a_403() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = register_user(&app, "Alice", "a@x.com", "secret1").await;
    register_user(&app, "Carol", "c@x.com", "secret3").await;
    let carol_auth = login(&app, "c@x.com", "secret3").await;

    let uri = format!("/api/v1/users/{}", alice["id"].as_str().unwrap());
    let response = put_json_auth(
        &app,
        &uri,
        carol_auth["access_token"].as_str().unwrap(),
        json!({ "first_name": "Mallory" }),
    )
    .await;
    assert_eq!(response.status(), 403);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Unauthorized action");
}

#[actix_web::test]
async fn unknown_target_is_a_404_even_for_a_foreign_actor() {
    let app = test::init_service(create_app(test_state())).await;
    register_user(&app, "Alice", "a@x.com", "secret1").await;
    let auth = login(&app, "a@x.com", "secret1").await;

    let response = put_json_auth(
        &app,
        "/api/v1/users/00000000-0000-0000-0000-000000000000",
        auth["access_token"].as_str().unwrap(),
        json!({ "first_name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn update_requires_a_valid_token() {
    let app = test::init_service(create_app(test_state())).await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let uri = format!("/api/v1/users/{}", user["id"].as_str().unwrap());

    let response = common::put_json(&app, &uri, json!({ "first_name": "Alicia" })).await;
    assert_eq!(response.status(), 401);

    let response = put_json_auth(&app, &uri, "bogus-token", json!({ "first_name": "X" })).await;
    assert_eq!(response.status(), 401);
}

#[actix_web::test]
async fn invalid_field_values_are_rejected() {
    let app = test::init_service(create_app(test_state())).await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let auth = login(&app, "a@x.com", "secret1").await;

    let uri = format!("/api/v1/users/{}", user["id"].as_str().unwrap());
    let response = put_json_auth(
        &app,
        &uri,
        auth["access_token"].as_str().unwrap(),
        json!({ "first_name": "" }),
    )
    .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "First name cannot be empty");
}
