//! Configuration management for sigbreak
//!
//! Only one section is currently understood:
//! - [excluded] - path prefixes that are never inspected for breaks

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Config file looked up in the working tree when none is given
pub const DEFAULT_CONFIG_FILENAME: &str = ".sigbreak.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub excluded: Option<ExcludedConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            excluded: None,
        }
    }
}

/// Paths excluded from break analysis.
///
/// Entries are matched as literal string prefixes of the file path, so
/// `lib` excludes `libfoo/x.go` as well as `lib/x.go`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcludedConfig {
    #[serde(default)]
    pub path: Vec<String>,
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

/// Get the config home directory, respecting XDG_CONFIG_HOME
pub fn get_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        if let Some(warning) = config.version_warning() {
            tracing::warn!("{}", warning);
        }

        Ok(config)
    }

    /// Get the global config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("sigbreak"))
    }

    /// Path of the user-wide `config.toml`, whether or not it exists
    pub fn global_config_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|d| d.join("config.toml"))
    }

    /// Excluded path prefixes, empty when no [excluded] section exists
    pub fn exclusions(&self) -> Vec<String> {
        self.excluded
            .as_ref()
            .map(|e| e.path.clone())
            .unwrap_or_default()
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if other.excluded.is_some() {
            self.excluded = other.excluded;
        }
        self
    }
}

/// Load the configuration of a working tree.
///
/// `filename` is resolved against `working_path` unless it is absolute.
/// A `global` file, when given and present, is read first and overridden
/// by the repo file. Returns `Ok(None)` when no file exists.
pub fn load_configuration(
    working_path: &Path,
    filename: &str,
    global: Option<&Path>,
) -> CoreResult<Option<Config>> {
    load_layered(global, &working_path.join(filename))
}

fn load_layered(global: Option<&Path>, repo: &Path) -> CoreResult<Option<Config>> {
    let mut config: Option<Config> = None;

    if let Some(global) = global.filter(|p| p.is_file()) {
        tracing::debug!(path = %global.display(), "loading global config");
        config = Some(Config::load_from_file(global)?);
    }

    if repo.is_file() {
        tracing::debug!(path = %repo.display(), "loading repo config");
        let loaded = Config::load_from_file(repo)?;
        config = Some(match config {
            Some(base) => base.merge(loaded),
            None => loaded,
        });
    }

    Ok(config)
}
