// ABOUTME: Optional defaults for the sshkey CLI read from a TOML file
// ABOUTME: Lives at ~/.config/sshkey/config.toml, overridden by command-line flags

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sshkey_keygen::KeyType;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults applied when the matching flag is not given.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Key type to generate
    #[serde(rename = "type")]
    pub key_type: Option<KeyType>,

    /// RSA key size in bits
    pub bits: Option<u16>,

    /// Key comment
    pub comment: Option<String>,

    /// Output format
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Returns the config directory path (~/.config/sshkey)
    ///
    /// Uses `XDG_CONFIG_HOME` if set, otherwise falls back to `~/.config`.
    pub fn config_dir() -> Result<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .context("Could not determine home directory")?;
        Ok(base.join("sshkey"))
    }

    /// Returns the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default config file if it exists.
    /// A missing default file yields empty defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::config_path()?;
                if default_path.exists() {
                    tracing::debug!(path = %default_path.display(), "Loading config");
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
