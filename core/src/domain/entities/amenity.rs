//! Amenity entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use hs_shared::utils::validation;

/// Maximum length for an amenity name, in characters
pub const AMENITY_NAME_MAX_CHARS: usize = 50;

/// Amenity entity. Associated with places many-to-many; the association
/// itself carries no attributes and lives in its own repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amenity {
    /// Unique identifier for the amenity
    pub id: Uuid,

    /// Amenity name
    pub name: String,

    /// Timestamp when the amenity was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the amenity was last updated
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    /// Creates a new Amenity, validating the name
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate an amenity name: non-empty, at most 50 characters
    pub fn validate_name(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) || !validation::max_chars(value, AMENITY_NAME_MAX_CHARS) {
            return Err(DomainError::validation(
                "Amenity name must be between 1 and 50 characters",
            ));
        }
        Ok(())
    }

    /// Sets the name, re-running validation
    pub fn set_name(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        Self::validate_name(&value)?;
        self.name = value;
        self.updated_at = Utc::now();
        Ok(())
    }
}
