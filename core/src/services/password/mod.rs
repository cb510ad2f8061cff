//! Password credential management
//!
//! Hashes and verifies user passwords. Plaintext passwords never leave this
//! module's call frames: they are not persisted, not logged, and the digest
//! is excluded from every outward user representation.

mod service;

pub use service::PasswordHasher;
