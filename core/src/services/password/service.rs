//! Bcrypt-backed password hasher

use crate::errors::{DomainError, DomainResult};

/// Service for hashing and verifying user passwords
///
/// Wraps bcrypt with a configurable work factor. Hashing is salted per call,
/// so two hashes of the same password differ; `verify` is the only way to
/// check a password against a stored digest.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the default bcrypt work factor
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Creates a hasher with an explicit work factor
    ///
    /// Lower costs are useful in tests; production uses the default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password into a storable digest
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|_| DomainError::Internal {
            message: "Password hashing failed".to_string(),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// Returns `true` iff the plaintext produced the digest. A malformed
    /// digest verifies as false rather than erroring, so login failures stay
    /// uniform.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
