//! Translation from domain errors to HTTP responses.
//!
//! Each domain error variant maps to exactly one status code and a short
//! message. Storage and internal failures are logged with their detail but
//! surfaced as an opaque 500.

use actix_web::HttpResponse;

use crate::dto::error::ErrorResponse;
use hs_core::errors::DomainError;

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Forbidden => HttpResponse::Forbidden()
            .json(ErrorResponse::new("unauthorized_action", "Unauthorized action")),
        DomainError::Unauthenticated => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "unauthenticated",
            "Authentication required",
        )),
        DomainError::InvalidCredentials => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_credentials",
            "Invalid email or password",
        )),
        DomainError::Token(token_error) => {
            log::debug!("token rejected: {}", token_error);
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                "invalid_token",
                "Invalid or expired token",
            ))
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// 400 response for a request that failed DTO validation
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}
