//! Platform rules that govern path comparison.
//!
//! Every normalization and comparison in this crate takes a [`PlatformRules`]
//! value instead of consulting ambient OS state, so results depend only on
//! their inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Case-sensitivity and drive-letter behavior for a platform.
///
/// # Examples
///
/// ```
/// use pathrel::PlatformRules;
///
/// let windows = PlatformRules::windows();
/// assert!(!windows.case_sensitive);
/// assert!(windows.has_drive_letters);
///
/// let posix = PlatformRules::posix();
/// assert!(posix.case_sensitive);
/// assert!(!posix.has_drive_letters);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformRules {
    /// Whether the filesystem distinguishes `a` from `A`.
    pub case_sensitive: bool,

    /// Whether paths may begin with a drive letter such as `C:`.
    pub has_drive_letters: bool,
}

impl PlatformRules {
    /// Linux and other case-sensitive Unix filesystems.
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            case_sensitive: true,
            has_drive_letters: false,
        }
    }

    /// Windows: case-insensitive with drive letters.
    #[must_use]
    pub const fn windows() -> Self {
        Self {
            case_sensitive: false,
            has_drive_letters: true,
        }
    }

    /// macOS default volumes: case-insensitive, no drive letters.
    #[must_use]
    pub const fn macos() -> Self {
        Self {
            case_sensitive: false,
            has_drive_letters: false,
        }
    }

    /// Rules for the platform this crate was compiled for.
    ///
    /// This is the only place the crate looks at the target platform, and it
    /// does so at compile time.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else if cfg!(target_os = "macos") {
            Self::macos()
        } else {
            Self::posix()
        }
    }

    /// Whether comparisons fold case when the caller does not say otherwise.
    #[must_use]
    pub const fn ignore_case_by_default(&self) -> bool {
        !self.case_sensitive
    }
}

impl Default for PlatformRules {
    fn default() -> Self {
        Self::host()
    }
}

/// Named platform presets accepted by configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformPreset {
    /// See [`PlatformRules::posix`].
    Posix,
    /// See [`PlatformRules::windows`].
    Windows,
    /// See [`PlatformRules::macos`].
    Macos,
    /// See [`PlatformRules::host`].
    Host,
}

impl PlatformPreset {
    /// The rules this preset stands for.
    #[must_use]
    pub const fn rules(self) -> PlatformRules {
        match self {
            Self::Posix => PlatformRules::posix(),
            Self::Windows => PlatformRules::windows(),
            Self::Macos => PlatformRules::macos(),
            Self::Host => PlatformRules::host(),
        }
    }
}

impl fmt::Display for PlatformPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
            Self::Macos => write!(f, "macos"),
            Self::Host => write!(f, "host"),
        }
    }
}

impl FromStr for PlatformPreset {
    type Err = Error;

    /// Parses a preset name (case-insensitive). `linux` and `unix` are
    /// accepted as aliases for `posix`, `darwin` for `macos`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "linux" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            "macos" | "darwin" => Ok(Self::Macos),
            "host" => Ok(Self::Host),
            _ => Err(Error::Validation {
                field: "platform".into(),
                message: format!("unknown platform '{s}' (expected posix, windows, macos or host)"),
            }),
        }
    }
}
