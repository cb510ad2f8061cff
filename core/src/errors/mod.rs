//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors
///
/// These errors represent token validation and generation failures. They all
/// surface to the caller as an authentication failure; the variants exist so
/// logs can tell the cases apart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Wrong token type: expected {expected}")]
    WrongTokenType { expected: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors
///
/// The boundary layer maps each variant onto an HTTP status: validation
/// failures to 400, missing resources to 404, forbidden actions to 403,
/// authentication failures to 401, everything else to 500.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Unauthorized action")]
    Forbidden,

    #[error("Authentication required")]
    Unauthenticated,

    /// Login failure. The message is intentionally generic: it must not
    /// reveal whether the email or the password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a validation failure with a message
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a storage failure
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
