//! Environment variable handling for configuration overrides.
//!
//! `PATHREL_PLATFORM`, `PATHREL_CASE_SENSITIVE` and `PATHREL_DRIVE_LETTERS`
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::platform::PlatformPreset;

/// Selects a platform preset.
pub const PLATFORM_ENV: &str = "PATHREL_PLATFORM";
/// Overrides case sensitivity.
pub const CASE_SENSITIVE_ENV: &str = "PATHREL_CASE_SENSITIVE";
/// Overrides drive-letter recognition.
pub const DRIVE_LETTERS_ENV: &str = "PATHREL_DRIVE_LETTERS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathrel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unknown preset or an
    /// unrecognized boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(PLATFORM_ENV) {
            let preset: PlatformPreset = value.parse().map_err(|_| Error::Validation {
                field: PLATFORM_ENV.into(),
                message: format!("unknown platform '{value}'"),
            })?;
            config.platform = Some(preset);
        }

        if let Some(value) = Self::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &value)?);
        }

        if let Some(value) = Self::var(DRIVE_LETTERS_ENV) {
            config.drive_letters = Some(Self::parse_bool(DRIVE_LETTERS_ENV, &value)?);
        }

        Ok(())
    }

    /// Parse a boolean environment value.
    ///
    /// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` for anything else.
    pub fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("invalid boolean value '{value}'"),
            }),
        }
    }

    fn var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}
