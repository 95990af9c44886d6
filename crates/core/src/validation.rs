//! Field validation for user-supplied input.
//!
//! Handlers call these before touching the database so bad input surfaces
//! as [`CoreError::Validation`] (HTTP 400) rather than a constraint error.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Upper bound on flashcard question/answer and to-do title length.
pub const MAX_TEXT_LEN: usize = 10_000;

/// Validate that a text field is non-blank and within [`MAX_TEXT_LEN`].
pub fn validate_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the shape of an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Normalise an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
