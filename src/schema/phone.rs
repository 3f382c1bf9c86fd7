//! Phone field validation and display formatting.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted phone shapes: ten contiguous digits, "ddd-ddd-dddd", "ddd-ddd", or "ddd".
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{10}|\d{3}-\d{3}-\d{4}|\d{3}-\d{3}|\d{3})$").expect("valid phone pattern")
});

/// Validate the phone field.
///
/// The field is optional: an empty value is always accepted. A non-empty
/// value must match one of the accepted shapes exactly.
///
/// # Errors
///
/// Returns `ValidationError::PhoneInvalid` for any other non-empty value.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Ok(());
    }

    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::PhoneInvalid);
    }

    Ok(())
}

/// Format raw phone input for display.
///
/// Strips every non-digit character, keeps at most ten digits, and inserts
/// hyphens after the third and sixth digit. Idempotent on its own output.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(10)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
