//! Authentication response value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;

/// Authentication response returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Id of the authenticated user
    pub user_id: Uuid,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and user id
    pub fn from_token_pair(token_pair: TokenPair, user_id: Uuid) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            user_id,
            expires_in: token_pair.access_expires_in,
        }
    }
}
