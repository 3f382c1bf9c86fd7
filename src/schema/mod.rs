//! Shared validation schema for the contact form.
//!
//! Single source of truth for field rules: the form runs these checks before
//! submitting, and the endpoint re-runs the same checks on the posted body.
//! Every check is pure, so the two sides can never disagree about whether a
//! given input passes or which message it fails with.

pub mod email;
pub mod phone;

pub use email::validate_email;
pub use phone::{format_phone, validate_phone};

use crate::models::{ContactFormValues, FieldErrors};
use std::fmt;

/// A field-level validation failure with a fixed, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The email field is empty.
    EmailRequired,

    /// The email field is non-empty but not a valid address.
    EmailInvalid,

    /// The phone field is non-empty and matches none of the accepted shapes.
    PhoneInvalid,
}

impl ValidationError {
    /// The user-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::EmailInvalid => "Please enter a valid email address",
            Self::PhoneInvalid => "Please enter a valid phone number (e.g., 412-977-8194)",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a full set of form values against the schema.
///
/// Returns the first issue per field. A missing phone is treated like an
/// empty one: valid.
pub fn validate(values: &ContactFormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if let Err(e) = validate_email(&values.email) {
        errors.email = Some(e.message().to_string());
    }

    if let Some(phone) = values.phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.phone = Some(e.message().to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(email: &str, phone: Option<&str>) -> ContactFormValues {
        ContactFormValues {
            email: email.to_string(),
            phone: phone.map(String::from),
        }
    }

    #[test]
    fn test_validate_accepts_valid_values() {
        assert!(validate(&values("a@b.com", Some("412-977-8194"))).is_ok());
        assert!(validate(&values("a@b.com", Some(""))).is_ok());
        assert!(validate(&values("a@b.com", None)).is_ok());
    }

    #[test]
    fn test_validate_reports_each_field_once() {
        let errors = validate(&values("not-an-email", Some("12"))).unwrap_err();
        assert_eq!(
            errors.email.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.phone.as_deref(),
            Some("Please enter a valid phone number (e.g., 412-977-8194)")
        );
    }

    #[test]
    fn test_validate_empty_email_uses_required_message() {
        let errors = validate(&values("", None)).unwrap_err();
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.phone, None);
    }

    #[test]
    fn test_validation_error_display_matches_message() {
        for err in [
            ValidationError::EmailRequired,
            ValidationError::EmailInvalid,
            ValidationError::PhoneInvalid,
        ] {
            assert_eq!(err.to_string(), err.message());
        }
    }
}
