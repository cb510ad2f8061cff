//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// JWT issuer
pub const JWT_ISSUER: &str = "homestay";

/// JWT audience
pub const JWT_AUDIENCE: &str = "homestay-api";

/// Discriminates access tokens from refresh tokens inside the claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Whether this is an access or a refresh token
    pub token_type: TokenType,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(user_id: Uuid, ttl_seconds: i64, issuer: &str, audience: &str) -> Self {
        Self::new(user_id, ttl_seconds, issuer, audience, TokenType::Access)
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(
        user_id: Uuid,
        ttl_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        Self::new(user_id, ttl_seconds, issuer, audience, TokenType::Refresh)
    }

    fn new(
        user_id: Uuid,
        ttl_seconds: i64,
        issuer: &str,
        audience: &str,
        token_type: TokenType,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            token_type,
        }
    }

    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// A freshly issued access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, access_expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
        }
    }
}
