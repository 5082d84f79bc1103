//! Builder that assembles configuration from every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathrel::config::{Config, ConfigBuilder};
/// use pathrel::{PlatformPreset, PlatformRules};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(PlatformPreset::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.platform_rules(), PlatformRules::windows());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_config: Option<PathBuf>,
    files: Vec<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user configuration from `path` instead of `~/.pathrel/config.yaml`.
    #[must_use]
    pub fn with_user_config(mut self, path: &Path) -> Self {
        self.user_config = Some(path.to_path_buf());
        self
    }

    /// Layer an explicit file above the discovered ones.
    ///
    /// Unlike discovered files, an explicit file must exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.files.push(path.to_path_buf());
        self
    }

    /// Ignore the user file and project discovery.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHREL_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match &mut self.overrides {
            Some(existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result is contradictory.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.user_config.as_deref())?);
        }

        for path in &self.files {
            sources.push(ConfigSource {
                config: ConfigLoader::load_file(path)?,
                path: path.clone(),
                precedence: ConfigSource::EXPLICIT,
            });
        }

        for source in &sources {
            log::debug!("configuration source: {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(&sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::error::Error;
    use crate::platform::{PlatformPreset, PlatformRules};
    use std::fs;
    use tempfile::TempDir;

    /// A builder isolated from the real home directory and environment.
    fn isolated(temp: &TempDir) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_user_config(&temp.path().join("no-user-config.yaml"))
            .skip_env()
    }

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert!(config.is_empty());
        assert_eq!(config.platform_rules(), PlatformRules::host());
    }

    #[test]
    fn test_build_reads_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "platform: windows\n").unwrap();

        let config = isolated(&temp).build().unwrap();
        assert_eq!(config.platform, Some(PlatformPreset::Windows));
    }

    #[test]
    fn test_project_overrides_user() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user.yaml");
        fs::write(&user, "platform: posix\ncase_sensitive: false\n").unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "platform: macos\n").unwrap();

        let config = isolated(&temp).with_user_config(&user).build().unwrap();
        assert_eq!(config.platform, Some(PlatformPreset::Macos));
        assert_eq!(config.case_sensitive, Some(false));
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "platform: macos\n").unwrap();
        let explicit = temp.path().join("explicit.yaml");
        fs::write(&explicit, "platform: windows\n").unwrap();

        let config = isolated(&temp).with_file(&explicit).build().unwrap();
        assert_eq!(config.platform, Some(PlatformPreset::Windows));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = isolated(&temp)
            .with_file(&temp.path().join("missing.yaml"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "platform: windows\n").unwrap();

        let config = isolated(&temp)
            .with_config(Config {
                platform: Some(PlatformPreset::Posix),
                ..Default::default()
            })
            .with_config(Config {
                case_sensitive: Some(false),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.platform, Some(PlatformPreset::Posix));
        assert_eq!(config.case_sensitive, Some(false));
    }

    #[test]
    fn test_contradiction_rejected_after_merge() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "drive_letters: true\n").unwrap();

        let err = isolated(&temp)
            .with_config(Config {
                platform: Some(PlatformPreset::Posix),
                ..Default::default()
            })
            .build()
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_skip_files_ignores_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "platform: windows\n").unwrap();

        let config = isolated(&temp).skip_files().build().unwrap();
        assert_eq!(config.platform, None);
    }
}
