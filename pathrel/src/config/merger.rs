//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathrel::config::{Config, ConfigMerger};
/// use pathrel::PlatformPreset;
///
/// let low = Config { platform: Some(PlatformPreset::Posix), ..Default::default() };
/// let high = Config { platform: Some(PlatformPreset::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.platform, Some(PlatformPreset::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[ConfigSource]) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.drive_letters.is_some() {
            target.drive_letters = source.drive_letters;
        }
    }
}
