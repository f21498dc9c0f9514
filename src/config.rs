//! Configuration management
//!
//! Loads settings from built-in defaults, an optional `config.toml`, and
//! `LOCAL_AUTH_*` environment overrides, then validates them. Every key has a
//! default so the component also runs with no config file present.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::validation::PASSWORD_MIN_LENGTH;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the JSON file backing the credential store
    pub storage_path: String,

    /// Maximum accepted length for the name field
    pub max_name_length: usize,

    /// Maximum accepted length for the email field
    pub max_email_length: usize,

    /// Maximum accepted length for the password field
    pub max_password_length: usize,
}

impl AppConfig {
    /// Load configuration with defaults, optional config.toml, and
    /// environment overrides (e.g. `LOCAL_AUTH_STORAGE_PATH`).
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("storage_path", "auth_store.json")?
            .set_default("max_name_length", 64u64)?
            .set_default("max_email_length", 254u64)?
            .set_default("max_password_length", 128u64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("LOCAL_AUTH"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.is_empty() {
            return Err(ConfigError::Message("storage_path cannot be empty".into()));
        }

        if self.max_name_length == 0 || self.max_email_length == 0 {
            return Err(ConfigError::Message(
                "field length limits must be greater than 0".into(),
            ));
        }

        if self.max_password_length < PASSWORD_MIN_LENGTH {
            return Err(ConfigError::Message(
                "max_password_length must allow the minimum password length".into(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: "auth_store.json".to_string(),
            max_name_length: 64,
            max_email_length: 254,
            max_password_length: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_storage_path_rejected() {
        let config = AppConfig {
            storage_path: String::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_password_limit_below_minimum_rejected() {
        let config = AppConfig {
            max_password_length: PASSWORD_MIN_LENGTH - 1,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
