//! HTTP API layer for the HomeStay backend
//!
//! Exposes the resource services over actix-web: DTOs, routes, JWT
//! middleware, and the translation from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
