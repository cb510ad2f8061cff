//! Amenity resource service

mod service;

#[cfg(test)]
mod tests;

pub use service::{AmenityService, NewAmenity, UpdateAmenity};
