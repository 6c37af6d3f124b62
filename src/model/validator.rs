//! Field validation for user records
//!
//! Validation semantics:
//! - `name` is required, length in [3,50]
//! - `email` is required, length in [5,255]
//! - `country` is required and non-empty (no length cap)
//!
//! Validation runs at write time inside the store, before any mutation,
//! and never coerces or defaults values.

use thiserror::Error;

use super::{NewUser, User};

/// Minimum `name` length.
pub const NAME_MIN: usize = 3;
/// Maximum `name` length.
pub const NAME_MAX: usize = 50;
/// Minimum `email` length.
pub const EMAIL_MIN: usize = 5;
/// Maximum `email` length.
pub const EMAIL_MAX: usize = 255;

/// A field that failed validation, with the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable rule description.
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for validation.
pub type ValidationResult = Result<(), ValidationError>;

/// Validates a candidate record for insertion (no id supplied).
pub fn validate_new(candidate: &NewUser) -> ValidationResult {
    validate_name(&candidate.name)?;
    validate_email(&candidate.email)?;
    validate_country(&candidate.country)
}

/// Validates a full record, e.g. after applying an update patch.
pub fn validate_user(user: &User) -> ValidationResult {
    validate_name(&user.name)?;
    validate_email(&user.email)?;
    validate_country(&user.country)
}

fn validate_name(name: &str) -> ValidationResult {
    let len = name.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(ValidationError::new(
            "name",
            format!("length must be in [{}, {}], got {}", NAME_MIN, NAME_MAX, len),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> ValidationResult {
    let len = email.chars().count();
    if len < EMAIL_MIN || len > EMAIL_MAX {
        return Err(ValidationError::new(
            "email",
            format!("length must be in [{}, {}], got {}", EMAIL_MIN, EMAIL_MAX, len),
        ));
    }
    Ok(())
}

fn validate_country(country: &str) -> ValidationResult {
    if country.is_empty() {
        return Err(ValidationError::new("country", "value is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str, country: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_valid_candidate_accepted() {
        assert!(validate_new(&candidate("george", "geo@gmail.com", "romania")).is_ok());
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_new(&candidate("abc", "geo@gmail.com", "romania")).is_ok());
        assert!(validate_new(&candidate(&"a".repeat(50), "geo@gmail.com", "romania")).is_ok());

        let err = validate_new(&candidate("ab", "geo@gmail.com", "romania")).unwrap_err();
        assert_eq!(err.field, "name");
        let err = validate_new(&candidate(&"a".repeat(51), "geo@gmail.com", "romania")).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_email_bounds() {
        assert!(validate_new(&candidate("george", "a@b.c", "romania")).is_ok());

        let err = validate_new(&candidate("george", "a@bc", "romania")).unwrap_err();
        assert_eq!(err.field, "email");
        let long = format!("{}@x.com", "a".repeat(250));
        let err = validate_new(&candidate("george", &long, "romania")).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_country_required() {
        let err = validate_new(&candidate("george", "geo@gmail.com", "")).unwrap_err();
        assert_eq!(err.field, "country");
    }
}
