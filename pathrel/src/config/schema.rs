//! Configuration schema definitions.
//!
//! A configuration file selects a platform preset and may override either of
//! the two flags that make up [`PlatformRules`].

use serde::{Deserialize, Serialize};

use crate::platform::{PlatformPreset, PlatformRules};

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other. Unknown keys are rejected.
///
/// # Examples
///
/// ```
/// use pathrel::config::Config;
/// use pathrel::{PlatformPreset, PlatformRules};
///
/// let config = Config {
///     platform: Some(PlatformPreset::Windows),
///     case_sensitive: Some(true),
///     ..Default::default()
/// };
///
/// let rules = config.platform_rules();
/// assert!(rules.case_sensitive);
/// assert!(rules.has_drive_letters);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Named preset the rules start from. Defaults to the host platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformPreset>,

    /// Overrides the preset's case sensitivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Overrides whether the preset recognizes drive letters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_letters: Option<bool>,
}

impl Config {
    /// Resolve the effective platform rules.
    ///
    /// Starts from the selected preset (the host platform if none is set) and
    /// applies the individual overrides on top.
    #[must_use]
    pub fn platform_rules(&self) -> PlatformRules {
        let mut rules = self.platform.map_or_else(PlatformRules::host, PlatformPreset::rules);

        if let Some(case_sensitive) = self.case_sensitive {
            rules.case_sensitive = case_sensitive;
        }
        if let Some(drive_letters) = self.drive_letters {
            rules.has_drive_letters = drive_letters;
        }

        rules
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
