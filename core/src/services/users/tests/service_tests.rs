use std::sync::Arc;
use uuid::Uuid;

use crate::errors::DomainError;
use crate::repositories::MockUserRepository;
use crate::services::password::PasswordHasher;
use crate::services::users::{NewUser, UpdateUser, UserService};

fn service() -> UserService<MockUserRepository> {
    UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(PasswordHasher::with_cost(bcrypt::MIN_COST)),
    )
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        is_admin: false,
    }
}

#[tokio::test]
async fn create_stores_a_digest_not_the_password() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    assert_ne!(user.password_hash, "secret1");
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn create_requires_a_password() {
    let service = service();
    let mut input = new_user("a@x.com");
    input.password = "   ".to_string();

    let err = service.create(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Password cannot be empty");
}

#[tokio::test]
async fn create_rejects_duplicate_emails_case_insensitively() {
    let service = service();
    service.create(new_user("a@x.com")).await.unwrap();

    let err = service.create(new_user("A@X.com")).await.unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn get_and_list() {
    let service = service();
    let created = service.create(new_user("a@x.com")).await.unwrap();

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(service.list().await.unwrap().len(), 1);

    let err = service.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn get_does_not_touch_updated_at() {
    let service = service();
    let created = service.create(new_user("a@x.com")).await.unwrap();

    let first = service.get(created.id).await.unwrap();
    let second = service.get(created.id).await.unwrap();
    assert_eq!(first.updated_at, second.updated_at);
    assert_eq!(first, second);
}

#[tokio::test]
async fn owner_can_update_own_names() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    let updated = service
        .update(
            user.id,
            user.id,
            UpdateUser {
                first_name: Some("Jane".to_string()),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.last_name, "Doe");
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn non_owner_update_is_forbidden() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    let err = service
        .update(
            user.id,
            Uuid::new_v4(),
            UpdateUser {
                first_name: Some("Jane".to_string()),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
}

#[tokio::test]
async fn email_in_update_payload_is_rejected_even_if_unchanged() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    let err = service
        .update(
            user.id,
            user.id,
            UpdateUser {
                email: Some("a@x.com".to_string()),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "You cannot modify email or password.");

    let err = service
        .update(
            user.id,
            user.id,
            UpdateUser {
                password: Some("secret1".to_string()),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "You cannot modify email or password.");
}

#[tokio::test]
async fn missing_target_outranks_forbidden() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    // Unknown id with a non-self actor must report 404, not 403
    let err = service
        .update(Uuid::new_v4(), user.id, UpdateUser::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn invalid_field_in_update_is_rejected_without_a_write() {
    let service = service();
    let user = service.create(new_user("a@x.com")).await.unwrap();

    let err = service
        .update(
            user.id,
            user.id,
            UpdateUser {
                first_name: Some("".to_string()),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let unchanged = service.get(user.id).await.unwrap();
    assert_eq!(unchanged.first_name, "John");
}
