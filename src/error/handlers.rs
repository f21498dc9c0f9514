//! Error handlers
//!
//! Provides error logging and the user-facing failure messages shown by the
//! front-end when an operation fails outright.

use log::error;

use crate::error::types::AppError;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("Auth component error: {}", err);
}

/// Convert an error to the generic dialog line shown to the user
///
/// Validation and authentication errors carry their own inline message, so
/// only storage and configuration failures fall back to a generic line.
pub fn error_to_user_message(err: &AppError) -> String {
    match err {
        AppError::Validation(e) => e.to_string(),
        AppError::Auth(e) => e.to_string(),
        AppError::Storage(_) => "Something went wrong. Please try again.".to_string(),
        AppError::Config(_) => "Configuration problem. Check the settings and restart.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::{AuthError, StorageError};
    use std::io;

    #[test]
    fn test_storage_errors_get_generic_message() {
        let err = AppError::from(StorageError::from(io::Error::other("disk gone")));
        assert_eq!(
            error_to_user_message(&err),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_auth_errors_keep_their_message() {
        let err = AppError::from(AuthError::InvalidCredentials);
        assert_eq!(error_to_user_message(&err), "Invalid email or password.");
    }
}
