//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::platform::PlatformPreset;

/// Validates a configuration for contradictory settings.
///
/// # Examples
///
/// ```
/// use pathrel::config::{Config, ConfigValidator};
/// use pathrel::PlatformPreset;
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let contradictory = Config {
///     platform: Some(PlatformPreset::Posix),
///     drive_letters: Some(true),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&contradictory).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when drive letters are enabled on an
    /// explicitly POSIX platform.
    pub fn validate(config: &Config) -> Result<()> {
        if config.platform == Some(PlatformPreset::Posix) && config.drive_letters == Some(true) {
            return Err(Error::Validation {
                field: "drive_letters".into(),
                message: "posix platforms have no drive letters".into(),
            });
        }

        Ok(())
    }
}
