//! User resource service
//!
//! Registration, lookup, and owner-only profile updates.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewUser, UpdateUser, UserService};
