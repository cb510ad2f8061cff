//! Authorization policy
//!
//! State-free decision functions applied by the resource services before a
//! protected mutation. Callers follow the error-priority contract: existence
//! is checked first (not-found), then these policies (forbidden), then
//! payload validation.

use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// A user may only act on their own account
pub fn ensure_self(actor: Uuid, target_user_id: Uuid) -> DomainResult<()> {
    if actor != target_user_id {
        return Err(DomainError::Forbidden);
    }
    Ok(())
}

/// Only the author of a review may modify or delete it
pub fn ensure_review_author(actor: Uuid, author_id: Uuid) -> DomainResult<()> {
    if actor != author_id {
        return Err(DomainError::Forbidden);
    }
    Ok(())
}

/// A user cannot review a place they own
///
/// Surfaced as a validation failure (400), matching the observed API
/// contract rather than a 403.
pub fn ensure_not_own_place(actor: Uuid, owner_id: Uuid) -> DomainResult<()> {
    if actor == owner_id {
        return Err(DomainError::validation("You cannot review your own place."));
    }
    Ok(())
}

/// The user-update payload may not carry credential fields
///
/// Attempting to change `email` or `password` through the update path is
/// rejected outright — even when the supplied value equals the current one —
/// never silently ignored.
pub fn ensure_no_credential_fields(has_email: bool, has_password: bool) -> DomainResult<()> {
    if has_email || has_password {
        return Err(DomainError::validation(
            "You cannot modify email or password.",
        ));
    }
    Ok(())
}
