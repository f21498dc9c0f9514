//! Authentication result types
//!
//! Defines result structures returned by auth operations. A failed
//! authentication is a `success: false` result, not an error; only storage
//! failures surface as `Err`.

/// Result of a login attempt
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub success: bool,
    pub email: String,
}

/// Result of a signup attempt
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub success: bool,
    pub email: String,
}
