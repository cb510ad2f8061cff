//! Request and response DTOs for the HTTP surface.

pub mod amenity;
pub mod auth;
pub mod error;
pub mod place;
pub mod review;
pub mod user;

pub use error::ErrorResponseExt;
