//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::AuthResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use hs_shared::utils::validation;

/// Authentication service for the login/identify/refresh flow
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Password hasher for digest verification
    password_hasher: Arc<PasswordHasher>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<PasswordHasher>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Authenticate a user by email and password
    ///
    /// The email is case-normalized before lookup. Failure is uniform: the
    /// same `InvalidCredentials` error is returned whether the account does
    /// not exist or the password is wrong, so the response cannot be used to
    /// probe for registered addresses.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Access + refresh tokens and the user id
    /// * `Err(DomainError::InvalidCredentials)` - Unknown email or bad password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = validation::normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) if self.password_hasher.verify(password, &user.password_hash) => user,
            _ => {
                tracing::debug!("login failed for a submitted email");
                return Err(DomainError::InvalidCredentials);
            }
        };

        let token_pair = self.token_service.generate_token_pair(user.id)?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse::from_token_pair(token_pair, user.id))
    }

    /// Recover the acting user's id from an access token
    ///
    /// Used by every protected operation. Validates signature, expiry, and
    /// that the token is an access token.
    pub fn identify(&self, token: &str) -> DomainResult<Uuid> {
        self.token_service.identify(token)
    }

    /// Exchange a valid refresh token for a fresh access token
    ///
    /// The refresh token itself is returned unchanged; only the access token
    /// is re-issued. The subject must still exist.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;

        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::Unauthenticated);
        }

        let access_token = self.token_service.generate_access_token(user_id)?;

        Ok(AuthResponse {
            access_token,
            refresh_token: refresh_token.to_string(),
            user_id,
            expires_in: self.token_service.access_token_expiry(),
        })
    }
}
