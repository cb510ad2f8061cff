//! Value objects shared between services and the API boundary.

pub mod auth_response;

pub use auth_response::AuthResponse;
