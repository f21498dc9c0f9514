//! Input validation
//!
//! Form-level checks run by the front-end before an auth operation is
//! attempted. Nothing here touches storage.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Characters that satisfy the special-character password rule
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .unwrap_or_else(|e| panic!("Invalid email regex: {}", e))
});

/// Performs basic input sanitation to reject empty, oversized, or
/// control-character-bearing fields before validation proper.
pub fn is_clean_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Returns whether `email` looks like a well-formed address.
///
/// Requires a local part of `[a-zA-Z0-9._%+-]`, an `@`, a domain of
/// `[a-zA-Z0-9.-]`, and a final dot followed by at least two letters.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks the password rules in fixed order and reports the first violation.
///
/// Rules: minimum length, an uppercase letter, a lowercase letter, a digit,
/// and one special character. `Ok(())` means every rule passed.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(ValidationError::PasswordMissingSpecialChar);
    }
    Ok(())
}
