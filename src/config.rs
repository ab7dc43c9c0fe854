//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/myapp/myapp.toml`
//! 3. Explicit config: `--config <FILE>`
//!
//! Settings are never read from environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::cli::{output, CliError};

/// Defaults for `user create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserSettings {
    /// Role assigned when `--role` is not given
    pub default_role: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_role: "USER".into(),
        }
    }
}

/// Defaults for `file backup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackupSettings {
    /// Destination shown when `--destination` is not given
    pub destination: String,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            destination: "./backup/".into(),
        }
    }
}

/// Unified configuration for myapp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub user: UserSettings,
    pub backup: BackupSettings,
}

/// Get the XDG config directory for myapp.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "myapp").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("myapp.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// A missing or broken global file is skipped with a warning. An explicit
    /// file must exist and parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Like [`Settings::load`], with the global file location given.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, CliError> {
        let global = global.filter(|&path| match Self::load_layers(Some(path), None) {
            Ok(_) => true,
            Err(e) => {
                output::warning(&format!("ignoring {}: {}", path.display(), e));
                false
            }
        });
        Self::load_layers(global, explicit)
    }

    /// Load from the given global and explicit layers on top of defaults.
    pub fn load_layers(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, CliError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("user.default_role", defaults.user.default_role)
            .map_err(config_err)?
            .set_default("backup.destination", defaults.backup.destination)
            .map_err(config_err)?;

        if let Some(path) = global {
            tracing::debug!("global config candidate: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        if let Some(path) = explicit {
            tracing::debug!("explicit config: {}", path.display());
            if !path.is_file() {
                return Err(CliError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
