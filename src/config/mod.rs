//! Configuration module.
//!
//! This module contains the representation of the user configuration
//! file, which provides default values for the global flags.

use anyhow::{bail, Context, Result};
use dirs::config_dir;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Represents the user config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub debug: Option<bool>,
}

impl TomlConfig {
    /// Reads and parses the TOML configuration at the optional given
    /// path.
    ///
    /// An explicit path must point to an existing file. Without path,
    /// the first existing default path is used, and an empty
    /// configuration is returned if none exists.
    pub fn from_opt_path(path: Option<&PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) if path.is_file() => path.clone(),
            Some(path) => bail!("cannot find config file at {}", path.display()),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("reading config file at {}", path.display());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file at {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("cannot parse config file at {}", path.display()))?;

        trace!("config: {:?}", config.redacted());
        Ok(config)
    }

    /// Returns the default config path, if it exists.
    ///
    /// The path is `"$CONFIG_DIR/gmail-imap-tool/config.toml"`, where
    /// `$CONFIG_DIR` is the OS-conventional configuration directory
    /// (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        Self::default_path_in(&config_dir()?)
    }

    fn default_path_in(dir: &Path) -> Option<PathBuf> {
        Some(dir.join(env!("CARGO_PKG_NAME")).join("config.toml")).filter(|path| path.is_file())
    }

    fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "<redacted>".into()),
            ..self.clone()
        }
    }
}
