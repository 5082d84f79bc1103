//! Error types for the pathrel library.
//!
//! The path functions themselves are total and never fail. Errors come from
//! the surfaces around them: parsing structured locations from text and
//! loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathrel error.
///
/// # Examples
///
/// ```
/// use pathrel::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathrel library.
#[derive(Debug, Error)]
pub enum Error {
    /// A string could not be parsed as a structured location.
    #[error("invalid location '{input}': {reason}")]
    InvalidLocation {
        /// The text that failed to parse.
        input: String,
        /// Why it failed.
        reason: String,
    },

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The reason reading failed.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error came from configuration loading or validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrel::Error;
    ///
    /// let err = Error::Validation { field: "platform".into(), message: "unknown".into() };
    /// assert!(err.is_config());
    /// ```
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigFile { .. } | Self::Configuration(_) | Self::Validation { .. }
        )
    }
}
