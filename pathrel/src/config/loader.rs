//! Configuration file discovery and loading.
//!
//! Two kinds of file are recognized: the user file at
//! `~/.pathrel/config.yaml` and a project `pathrel.yaml` found by walking up
//! from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name searched for in the working directory and its ancestors.
pub const PROJECT_CONFIG_FILE: &str = "pathrel.yaml";

/// Directory under the home directory that holds the user configuration.
pub const USER_CONFIG_DIR: &str = ".pathrel";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathrel::config::{ConfigSource, Config};
/// use std::path::PathBuf;
///
/// let user = ConfigSource {
///     path: PathBuf::from("~/.pathrel/config.yaml"),
///     precedence: ConfigSource::USER,
///     config: Config::default(),
/// };
/// assert!(user.precedence < ConfigSource::PROJECT);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

impl ConfigSource {
    /// Precedence of the user configuration file.
    pub const USER: u8 = 1;
    /// Precedence of a discovered `pathrel.yaml`.
    pub const PROJECT: u8 = 2;
    /// Precedence of a file named explicitly by the caller.
    pub const EXPLICIT: u8 = 3;
}

/// Loads configuration from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use pathrel::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// `user_config` replaces the default `~/.pathrel/config.yaml` location.
    /// The returned sources are sorted from lowest to highest precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_config: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config(user_config)? {
            sources.push(user);
        }

        if let Some(project) = Self::discover_project_config(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(path: Option<&Path>) -> Result<Option<ConfigSource>> {
        let Some(config_path) = path.map(Path::to_path_buf).or_else(Self::user_config_path) else {
            log::debug!("no home directory, skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: ConfigSource::USER,
            config,
        }))
    }

    /// Find the nearest `pathrel.yaml` at or above `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                log::debug!("found project configuration at {}", candidate.display());
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: ConfigSource::PROJECT,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Default location of the user configuration file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
