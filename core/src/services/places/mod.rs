//! Place resource service
//!
//! Listing CRUD plus the place↔amenity association surface.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewPlace, PlaceService, UpdatePlace};
