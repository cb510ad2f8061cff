//! End-to-end review rules: forced authorship, own-place rejection,
//! duplicate rejection, author-only mutation.

mod common;

use actix_web::test;
use serde_json::json;

use common::{
    delete_auth, get, login, post_json, post_json_auth, put_json_auth, register_user, test_state,
};
use hs_api::create_app;

/// Register A and B, log both in, and let A create a place.
/// Returns (place_id, a_token, a_id, b_token, b_id).
async fn place_and_two_users<S, B>(app: &S) -> (String, String, String, String, String)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody + Unpin,
{
    let a = register_user(app, "Alice", "a@x.com", "secret1").await;
    register_user(app, "Bob", "b@x.com", "secret2").await;
    let a_auth = login(app, "a@x.com", "secret1").await;
    let b_auth = login(app, "b@x.com", "secret2").await;

    let response = post_json(
        app,
        "/api/v1/places",
        json!({
            "title": "Cozy loft",
            "price": 100.0,
            "latitude": 10.0,
            "longitude": 10.0,
            "owner_id": a["id"],
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    let place: serde_json::Value = test::read_body_json(response).await;

    (
        place["id"].as_str().unwrap().to_string(),
        a_auth["access_token"].as_str().unwrap().to_string(),
        a_auth["user_id"].as_str().unwrap().to_string(),
        b_auth["access_token"].as_str().unwrap().to_string(),
        b_auth["user_id"].as_str().unwrap().to_string(),
    )
}

#[actix_web::test]
async fn review_creation_forces_the_actor_as_author() {
    let app = test::init_service(create_app(test_state())).await;
    let (place_id, _a_token, a_id, b_token, b_id) = place_and_two_users(&app).await;

    // B claims A's id in the payload; the stored author is still B
    let response = post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({ "text": "nice", "rating": 5, "place_id": place_id, "user_id": a_id }),
    )
    .await;
    assert_eq!(response.status(), 201);
    let review: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(review["user_id"], b_id.as_str());
    assert_eq!(review["place_id"], place_id.as_str());
    assert_eq!(review["rating"], 5);
}

#[actix_web::test]
async fn duplicate_and_own_place_reviews_are_rejected() {
    let app = test::init_service(create_app(test_state())).await;
    let (place_id, a_token, _a_id, b_token, _b_id) = place_and_two_users(&app).await;

    let body = json!({ "text": "nice", "rating": 5, "place_id": place_id });

    let response = post_json_auth(&app, "/api/v1/reviews", &b_token, body.clone()).await;
    assert_eq!(response.status(), 201);

    // Second review by B for the same place
    let response = post_json_auth(&app, "/api/v1/reviews", &b_token, body.clone()).await;
    assert_eq!(response.status(), 400);
    let dup: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(dup["message"], "You have already reviewed this place.");

    // A reviews A's own place
    let response = post_json_auth(&app, "/api/v1/reviews", &a_token, body).await;
    assert_eq!(response.status(), 400);
    let own: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(own["message"], "You cannot review your own place.");
}

#[actix_web::test]
async fn review_creation_requires_authentication_and_valid_input() {
    let app = test::init_service(create_app(test_state())).await;
    let (place_id, _a_token, _a_id, b_token, _b_id) = place_and_two_users(&app).await;

    // No token
    let response = post_json(
        &app,
        "/api/v1/reviews",
        json!({ "text": "nice", "rating": 5, "place_id": place_id }),
    )
    .await;
    assert_eq!(response.status(), 401);

    // Out-of-range rating
    let response = post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({ "text": "nice", "rating": 6, "place_id": place_id }),
    )
    .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Rating must be an integer between 1 and 5");

    // Blank text
    let response = post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({ "text": "   ", "rating": 3, "place_id": place_id }),
    )
    .await;
    assert_eq!(response.status(), 400);

    // Unknown place
    let response = post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({
            "text": "nice",
            "rating": 3,
            "place_id": "00000000-0000-0000-0000-000000000000",
        }),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn only_the_author_may_update_or_delete() {
    let app = test::init_service(create_app(test_state())).await;
    let (place_id, _a_token, _a_id, b_token, _b_id) = place_and_two_users(&app).await;
    register_user(&app, "Carol", "c@x.com", "secret3").await;
    let c_auth = login(&app, "c@x.com", "secret3").await;
    let c_token = c_auth["access_token"].as_str().unwrap();

    let response = post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({ "text": "nice", "rating": 5, "place_id": place_id }),
    )
    .await;
    let review: serde_json::Value = test::read_body_json(response).await;
    let uri = format!("/api/v1/reviews/{}", review["id"].as_str().unwrap());

    // A third party gets a 403, distinct from not-found
    let response = put_json_auth(&app, &uri, c_token, json!({ "rating": 1 })).await;
    assert_eq!(response.status(), 403);
    let response = delete_auth(&app, &uri, c_token).await;
    assert_eq!(response.status(), 403);

    // The author may update
    let response = put_json_auth(&app, &uri, &b_token, json!({ "text": "even better" })).await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(updated["text"], "even better");
    assert_eq!(updated["rating"], 5);

    // And delete
    let response = delete_auth(&app, &uri, &b_token).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Review deleted successfully");

    let response = get(&app, &uri).await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn reviews_are_listed_globally_and_per_place() {
    let app = test::init_service(create_app(test_state())).await;
    let (place_id, _a_token, _a_id, b_token, _b_id) = place_and_two_users(&app).await;

    post_json_auth(
        &app,
        "/api/v1/reviews",
        &b_token,
        json!({ "text": "nice", "rating": 5, "place_id": place_id }),
    )
    .await;

    let response = get(&app, "/api/v1/reviews").await;
    assert_eq!(response.status(), 200);
    let all: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let response = get(&app, &format!("/api/v1/places/{}/reviews", place_id)).await;
    assert_eq!(response.status(), 200);
    let per_place: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(per_place.as_array().unwrap().len(), 1);

    let response = get(
        &app,
        "/api/v1/places/00000000-0000-0000-0000-000000000000/reviews",
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn mutating_an_unknown_review_is_a_404() {
    let app = test::init_service(create_app(test_state())).await;
    register_user(&app, "Alice", "a@x.com", "secret1").await;
    let auth = login(&app, "a@x.com", "secret1").await;
    let token = auth["access_token"].as_str().unwrap();

    let uri = "/api/v1/reviews/00000000-0000-0000-0000-000000000000";
    let response = put_json_auth(&app, uri, token, json!({ "rating": 3 })).await;
    assert_eq!(response.status(), 404);
    let response = delete_auth(&app, uri, token).await;
    assert_eq!(response.status(), 404);
}
