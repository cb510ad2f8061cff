//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access and refresh tokens
///
/// Both token kinds are stateless HS256 JWTs bound to the user id as
/// subject; a `token_type` claim keeps a refresh token from being accepted
/// where an access token is required and vice versa.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }

    /// Generates a new access/refresh token pair for a user
    pub fn generate_token_pair(&self, user_id: Uuid) -> DomainResult<TokenPair> {
        let access = self.encode_claims(&Claims::new_access_token(
            user_id,
            self.config.access_token_expiry,
            &self.config.issuer,
            &self.config.audience,
        ))?;
        let refresh = self.encode_claims(&Claims::new_refresh_token(
            user_id,
            self.config.refresh_token_expiry,
            &self.config.issuer,
            &self.config.audience,
        ))?;

        Ok(TokenPair::new(
            access,
            refresh,
            self.config.access_token_expiry,
        ))
    }

    /// Generates a fresh access token for a user (refresh flow)
    pub fn generate_access_token(&self, user_id: Uuid) -> DomainResult<String> {
        self.encode_claims(&Claims::new_access_token(
            user_id,
            self.config.access_token_expiry,
            &self.config.issuer,
            &self.config.audience,
        ))
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode_claims(token)?;
        if claims.token_type != TokenType::Access {
            return Err(TokenError::WrongTokenType {
                expected: "access".to_string(),
            }
            .into());
        }
        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    pub fn verify_refresh_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode_claims(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(TokenError::WrongTokenType {
                expected: "refresh".to_string(),
            }
            .into());
        }
        Ok(claims)
    }

    /// Recovers the acting user's id from an access token
    pub fn identify(&self, token: &str) -> DomainResult<Uuid> {
        let claims = self.verify_access_token(token)?;
        Ok(claims.user_id()?)
    }

    fn encode_claims(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    fn decode_claims(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                let token_error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                        TokenError::InvalidClaims
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                token_error.into()
            })
    }
}
