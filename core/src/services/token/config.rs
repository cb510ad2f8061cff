//! Token service configuration

use hs_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for HS256 signing
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Issuer claim
    pub issuer: String,

    /// Audience claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("dev-secret-change-in-production"),
            access_token_expiry: 3600,       // 1 hour
            refresh_token_expiry: 2_592_000, // 30 days
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
