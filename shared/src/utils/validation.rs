//! Pure validation primitives used by the domain entities
//!
//! These functions are stateless field checks: they look at one value and
//! answer yes or no. The entities in the core crate compose them into
//! per-field validators with domain-specific error messages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular expression for email addresses: `local@domain.tld`.
/// Applied case-insensitively; callers lowercase the stored value.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap()
});

/// Check that a string is non-empty after trimming whitespace.
///
/// Whitespace-only strings are treated as absent.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that a string is at most `max` characters long.
///
/// Length is measured in characters, not bytes.
pub fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Check that a string matches the email pattern.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
