//! User service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::authorization;
use crate::services::password::PasswordHasher;

/// Input for user registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Partial input for a user update
///
/// `email` and `password` are carried so their *presence* can be rejected by
/// policy; they are never applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Service exposing user CRUD operations
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    password_hasher: Arc<PasswordHasher>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register a new user
    ///
    /// Validates every field, requires a non-empty password, rejects
    /// duplicate emails, and stores only the password digest. The returned
    /// entity serializes without the digest.
    pub async fn create(&self, input: NewUser) -> DomainResult<User> {
        if input.password.trim().is_empty() {
            return Err(DomainError::validation("Password cannot be empty"));
        }

        let password_hash = self.password_hasher.hash(&input.password)?;
        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            password_hash,
            input.is_admin,
        )?;

        if self.user_repository.exists_by_email(&user.email).await? {
            return Err(DomainError::validation("Email already registered"));
        }

        let created = self.user_repository.create(user).await?;
        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    /// Fetch a user by id
    pub async fn get(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// List all users
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    /// Update a user's profile
    ///
    /// Error priority follows the surface contract: unknown target (404)
    /// before non-self actor (403) before credential-field rejection and
    /// field validation (400). Only supplied fields change.
    pub async fn update(&self, id: Uuid, actor: Uuid, input: UpdateUser) -> DomainResult<User> {
        let mut user = self.get(id).await?;

        authorization::ensure_self(actor, id)?;
        authorization::ensure_no_credential_fields(
            input.email.is_some(),
            input.password.is_some(),
        )?;

        if let Some(first_name) = input.first_name {
            user.set_first_name(first_name)?;
        }
        if let Some(last_name) = input.last_name {
            user.set_last_name(last_name)?;
        }

        self.user_repository.update(user).await
    }

    /// Delete a user through the persistence layer (no HTTP surface)
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }
}
