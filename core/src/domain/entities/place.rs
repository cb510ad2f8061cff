//! Place entity representing a rental listing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use hs_shared::utils::validation;

/// Maximum length for a place title, in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Place entity representing a rental listing
///
/// The numeric fields (price, latitude, longitude) are private and only
/// reachable through validating mutators, so every assignment re-runs the
/// range checks — there is no way to set a raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Unique identifier for the place
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    price: f64,
    latitude: f64,
    longitude: f64,

    /// Reference to the owning user
    pub owner_id: Uuid,

    /// Timestamp when the place was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the place was last updated
    pub updated_at: DateTime<Utc>,
}

impl Place {
    /// Creates a new Place, validating every field
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: Uuid,
    ) -> DomainResult<Self> {
        let title = title.into();
        Self::validate_title(&title)?;
        Self::validate_price(price)?;
        Self::validate_latitude(latitude)?;
        Self::validate_longitude(longitude)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a Place from stored fields, re-running the validators
    ///
    /// Used by persistence implementations when mapping rows back into
    /// entities; it deliberately goes through the same checks as `new` so
    /// stored data cannot bypass them.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: Uuid,
        title: String,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::validate_title(&title)?;
        Self::validate_price(price)?;
        Self::validate_latitude(latitude)?;
        Self::validate_longitude(longitude)?;

        Ok(Self {
            id,
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            created_at,
            updated_at,
        })
    }

    /// Validate a title: non-empty, at most 100 characters
    pub fn validate_title(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) {
            return Err(DomainError::validation("Title cannot be empty"));
        }
        if !validation::max_chars(value, TITLE_MAX_CHARS) {
            return Err(DomainError::validation(
                "Title must be 100 characters or less",
            ));
        }
        Ok(())
    }

    /// Validate a price: finite and non-negative
    pub fn validate_price(value: f64) -> DomainResult<()> {
        if !value.is_finite() {
            return Err(DomainError::validation("Price must be a number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("Price cannot be negative"));
        }
        Ok(())
    }

    /// Validate a latitude: finite and within −90..=90
    pub fn validate_latitude(value: f64) -> DomainResult<()> {
        if !value.is_finite() {
            return Err(DomainError::validation("Latitude must be a number"));
        }
        if !(-90.0..=90.0).contains(&value) {
            return Err(DomainError::validation(
                "Latitude must be between -90 and 90",
            ));
        }
        Ok(())
    }

    /// Validate a longitude: finite and within −180..=180
    pub fn validate_longitude(value: f64) -> DomainResult<()> {
        if !value.is_finite() {
            return Err(DomainError::validation("Longitude must be a number"));
        }
        if !(-180.0..=180.0).contains(&value) {
            return Err(DomainError::validation(
                "Longitude must be between -180 and 180",
            ));
        }
        Ok(())
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Sets the title, re-running validation
    pub fn set_title(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        Self::validate_title(&value)?;
        self.title = value;
        self.touch();
        Ok(())
    }

    /// Sets the description
    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
        self.touch();
    }

    /// Sets the price, re-running validation
    pub fn set_price(&mut self, value: f64) -> DomainResult<()> {
        Self::validate_price(value)?;
        self.price = value;
        self.touch();
        Ok(())
    }

    /// Sets the latitude, re-running validation
    pub fn set_latitude(&mut self, value: f64) -> DomainResult<()> {
        Self::validate_latitude(value)?;
        self.latitude = value;
        self.touch();
        Ok(())
    }

    /// Sets the longitude, re-running validation
    pub fn set_longitude(&mut self, value: f64) -> DomainResult<()> {
        Self::validate_longitude(value)?;
        self.longitude = value;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
