//! Review resource service
//!
//! Authenticated review creation with ownership and duplicate rules,
//! author-only mutation.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewReview, ReviewService, UpdateReview};
