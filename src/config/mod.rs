//! Configuration management
//!
//! Settings live in `~/.snooze/config.yaml`. The `SNOOZE_HOME` environment
//! variable relocates the whole data directory.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "SNOOZE_HOME";

/// Keys accepted by `snooze config get/set`.
pub const CONFIG_KEYS: &[&str] = &["api_url", "use_keyring"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Story server base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Keep the session in the OS keychain instead of a file
    #[serde(default)]
    pub use_keyring: bool,
}

impl Config {
    /// Loads the config from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config: {e}"))?;
        fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// The story server URL, falling back to the public default.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Reads one setting as a display string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => Some(self.api_url().to_string()),
            "use_keyring" => Some(self.use_keyring.to_string()),
            _ => None,
        }
    }

    /// Updates one setting from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                let value = value.trim().trim_end_matches('/');
                self.api_url = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "use_keyring" => {
                self.use_keyring = value
                    .trim()
                    .parse()
                    .with_context(|| format!("use_keyring expects true or false, got '{value}'"))?;
            }
            _ => bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(snooze_dir()?.join("config.yaml"))
    }
}

/// Directory holding config and session files (`~/.snooze` by default).
pub fn snooze_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
        .join(".snooze");
    Ok(dir)
}

/// Default location of the persisted session.
pub fn session_path() -> Result<PathBuf> {
    Ok(snooze_dir()?.join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set("api_url", "http://localhost:5000/").unwrap();
        config.set("use_keyring", "true").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url(), "http://localhost:5000");
        assert!(loaded.use_keyring);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set("theme", "dark").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_set_rejects_bad_bool() {
        let mut config = Config::default();
        assert!(config.set("use_keyring", "sometimes").is_err());
    }

    #[test]
    fn test_blank_api_url_resets_to_default() {
        let mut config = Config::default();
        config.set("api_url", "http://localhost:5000").unwrap();
        config.set("api_url", "").unwrap();
        assert_eq!(config.get("api_url").as_deref(), Some(DEFAULT_API_URL));
    }
}
