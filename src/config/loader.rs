//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::{Config, IntegrationsConfig};

/// Local config file name
const LOCAL_CONFIG_FILE: &str = ".tfcheck.toml";

impl Config {
    /// Parse a single TOML config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration for the current working directory
    ///
    /// # Errors
    /// Returns an error if a config file exists but is malformed
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from_dir(&cwd)
    }

    /// Load configuration, looking for `.tfcheck.toml` in `dir`
    ///
    /// The first file found wins: `dir/.tfcheck.toml`, then the global
    /// `tfcheck/config.toml`, then built-in defaults. A local file never
    /// sets `[integration]`; those values always come from the global file.
    ///
    /// # Errors
    /// Returns an error if a config file exists but is malformed
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let local = Self::local_config_path_from(dir);
        if local.is_file() {
            let mut config = Self::from_file(&local)?;
            config.integrations = Self::global_integrations();
            config.base_dir = Some(dir.to_path_buf());
            return Ok(config);
        }

        match Self::global_config_path().filter(|path| path.is_file()) {
            Some(global) => Self::from_file(&global),
            None => Ok(Self::default()),
        }
    }

    /// `[integration]` from the global file; a missing or broken global file yields defaults
    fn global_integrations() -> IntegrationsConfig {
        Self::global_config_path()
            .filter(|path| path.is_file())
            .and_then(|path| Self::from_file(&path).ok())
            .map(|config| config.integrations)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn local_config_path_from(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_FILE)
    }

    /// Relative path of the local config file
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// `$XDG_CONFIG_HOME/tfcheck/config.toml`, or `~/.config/tfcheck/config.toml`
    ///
    /// A relative `XDG_CONFIG_HOME` is ignored.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("tfcheck").join("config.toml"))
    }

    /// Resolve the configured module directory
    ///
    /// Absolute paths are returned as-is. Relative paths are joined to the
    /// local config's directory, or to `cwd` when no local config was loaded.
    #[must_use]
    pub fn resolve_module_dir(&self, cwd: &Path) -> PathBuf {
        let dir = Path::new(&self.module.dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        self.base_dir.as_deref().unwrap_or(cwd).join(dir)
    }
}
