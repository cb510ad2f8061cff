//! User entity representing a registered account in the HomeStay system.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use hs_shared::utils::validation;

/// Maximum length for first and last names, in characters
pub const NAME_MAX_CHARS: usize = 50;

/// User entity representing a registered user
///
/// The password hash is carried by the entity for credential verification but
/// is never serialized: any outward representation of a user omits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// User's first name
    pub first_name: String,

    /// User's last name
    pub last_name: String,

    /// User's email address, stored lowercased
    pub email: String,

    /// Bcrypt digest of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the user has administrative privileges
    pub is_admin: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User, validating every field
    ///
    /// The email is normalized to lowercase before storage. The caller is
    /// responsible for hashing the password; the entity only ever sees the
    /// digest.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        is_admin: bool,
    ) -> DomainResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        Self::validate_first_name(&first_name)?;
        Self::validate_last_name(&last_name)?;
        Self::validate_email(&email)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email: validation::normalize_email(&email),
            password_hash: password_hash.into(),
            is_admin,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate a first name: non-empty, at most 50 characters
    pub fn validate_first_name(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) {
            return Err(DomainError::validation("First name cannot be empty"));
        }
        if !validation::max_chars(value, NAME_MAX_CHARS) {
            return Err(DomainError::validation(
                "First name must be 50 characters or less",
            ));
        }
        Ok(())
    }

    /// Validate a last name: non-empty, at most 50 characters
    pub fn validate_last_name(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) {
            return Err(DomainError::validation("Last name cannot be empty"));
        }
        if !validation::max_chars(value, NAME_MAX_CHARS) {
            return Err(DomainError::validation(
                "Last name must be 50 characters or less",
            ));
        }
        Ok(())
    }

    /// Validate an email address against the fixed pattern
    pub fn validate_email(value: &str) -> DomainResult<()> {
        if !validation::not_blank(value) {
            return Err(DomainError::validation("Email cannot be empty"));
        }
        if !validation::is_valid_email(value.trim()) {
            return Err(DomainError::validation("Invalid email format"));
        }
        Ok(())
    }

    /// Sets the first name, re-running validation
    pub fn set_first_name(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        Self::validate_first_name(&value)?;
        self.first_name = value;
        self.touch();
        Ok(())
    }

    /// Sets the last name, re-running validation
    pub fn set_last_name(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        Self::validate_last_name(&value)?;
        self.last_name = value;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("John", "Doe", "john.doe@example.com", "$2b$12$digest", false).unwrap()
    }

    #[test]
    fn new_user_lowercases_email() {
        let user = User::new("John", "Doe", "John.Doe@Example.COM", "digest", false).unwrap();
        assert_eq!(user.email, "john.doe@example.com");
        assert!(!user.is_admin);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn rejects_blank_names() {
        assert!(User::new("", "Doe", "a@b.co", "d", false).is_err());
        assert!(User::new("   ", "Doe", "a@b.co", "d", false).is_err());
        assert!(User::new("John", "", "a@b.co", "d", false).is_err());
    }

    #[test]
    fn rejects_names_over_fifty_chars() {
        let long = "x".repeat(51);
        assert!(User::new(long.clone(), "Doe", "a@b.co", "d", false).is_err());
        assert!(User::new("John", long, "a@b.co", "d", false).is_err());
        // Exactly 50 is fine
        let exact = "x".repeat(50);
        assert!(User::new(exact.clone(), exact, "a@b.co", "d", false).is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(User::new("John", "Doe", "", "d", false).is_err());
        assert!(User::new("John", "Doe", "not-an-email", "d", false).is_err());
        assert!(User::new("John", "Doe", "john@nodot", "d", false).is_err());
    }

    #[test]
    fn serialized_user_never_contains_the_digest() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "john.doe@example.com");
        assert_eq!(json["first_name"], "John");
    }

    #[test]
    fn set_first_name_validates_and_touches() {
        let mut user = sample_user();
        let before = user.updated_at;
        assert!(user.set_first_name("").is_err());
        assert_eq!(user.first_name, "John");

        user.set_first_name("Jane").unwrap();
        assert_eq!(user.first_name, "Jane");
        assert!(user.updated_at >= before);
    }
}
