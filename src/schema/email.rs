//! Email field validation.

use super::ValidationError;

/// Validate the email field.
///
/// # Validation Rules
///
/// - Must not be empty (fails with the required message)
/// - Must contain exactly one '@' symbol
/// - Must have a local part before '@'
/// - Must have a domain part after '@' with at least one '.'
///
/// # Errors
///
/// Returns `ValidationError::EmailRequired` for an empty field and
/// `ValidationError::EmailInvalid` for anything else that fails the rules.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if !is_valid(email) {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

/// Validate email format.
fn is_valid(email: &str) -> bool {
    // Basic validation: check for '@' and a domain part
    let parts: Vec<&str> = email.split('@').collect();

    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part must not be empty
    if local.is_empty() {
        return false;
    }

    // Domain must have at least one '.' and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Domain parts must not be empty
    for part in domain.split('.') {
        if part.is_empty() {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.co.uk").is_ok());
        assert!(validate_email("a@b.com").is_ok());
    }

    #[test]
    fn test_email_empty_is_required() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_email_validates_format() {
        assert_eq!(validate_email("invalid"), Err(ValidationError::EmailInvalid));
        assert_eq!(
            validate_email("@example.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(validate_email("user@"), Err(ValidationError::EmailInvalid));
        assert_eq!(
            validate_email("user@domain"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email("user@@example.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email("user@example..com"),
            Err(ValidationError::EmailInvalid)
        );
    }
}
