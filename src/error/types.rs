//! Error types
//!
//! Defines domain-specific error types for each module of the auth component.

use std::fmt;
use std::io;

/// Validation module errors
///
/// The `Display` text of each variant is the exact message shown to the user
/// next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordMissingSpecialChar,
    MalformedInput(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => {
                write!(f, "Please enter a valid email address.")
            }
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least 6 characters long.")
            }
            ValidationError::PasswordMissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter.")
            }
            ValidationError::PasswordMissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter.")
            }
            ValidationError::PasswordMissingDigit => {
                write!(f, "Password must contain at least one number.")
            }
            ValidationError::PasswordMissingSpecialChar => {
                write!(f, "Password must contain at least one special character.")
            }
            ValidationError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Authentication module errors
///
/// These never escape the auth manager as `Err`; they are converted into the
/// `auth_error` string state that the front-end displays inline. Unknown email
/// and wrong password deliberately share one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    EmailAlreadyRegistered,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password."),
            AuthError::EmailAlreadyRegistered => write!(f, "Email is already registered."),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "Storage IO error: {}", e),
            StorageError::Serialization(e) => write!(f, "Stored value is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            StorageError::Serialization(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

/// Top-level application error aggregating all module errors
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Auth(AuthError),
    Storage(StorageError),
    Config(config::ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Auth(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::Storage(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}
