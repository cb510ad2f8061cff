//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the core token service, and injects the acting identity into the
//! request extensions. Handlers receive it through the `AuthContext`
//! extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    http::StatusCode,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::dto::error::{ErrorResponse, ErrorResponseExt};
use hs_core::services::token::TokenService;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the access token's subject
    pub user_id: Uuid,
    /// JWT ID for tracing
    pub jti: String,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| {
            actix_web::error::InternalError::from_response(
                "missing auth context",
                ErrorResponse::new("unauthenticated", "Authentication required")
                    .to_response(StatusCode::UNAUTHORIZED),
            )
            .into()
        }))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a JWT authentication middleware bound to a token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized("Missing or invalid Authorization header")),
            };

            let claims = match token_service.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(_) => return Err(unauthorized("Invalid or expired token")),
            };

            let user_id = match claims.user_id() {
                Ok(user_id) => user_id,
                Err(_) => return Err(unauthorized("Invalid or expired token")),
            };

            req.extensions_mut().insert(AuthContext {
                user_id,
                jti: claims.jti,
            });

            service.call(req).await
        })
    }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn unauthorized(message: &str) -> Error {
    actix_web::error::InternalError::from_response(
        message.to_string(),
        ErrorResponse::new("unauthenticated", message).to_response(StatusCode::UNAUTHORIZED),
    )
    .into()
}
