use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Default base URL of the checked API.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";
/// Default reference city.
pub const DEFAULT_CITY: &str = "Moscow";
/// Coordinates of the default reference city.
pub const DEFAULT_LAT: f64 = 55.7558;
pub const DEFAULT_LON: f64 = 37.6173;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Configuration for a conformance run.
///
/// Example TOML:
/// api_key = "..."
/// city = "Moscow"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credential sent as the `appid` query parameter. May be empty; the
    /// request is still issued and the remote rejects it with a non-200 status.
    pub api_key: String,

    /// Base URL the endpoint paths are appended to.
    pub base_url: String,

    /// City whose weather the scenarios look up.
    pub city: String,

    /// Coordinates expected to resolve to `city`.
    pub lat: f64,
    pub lon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            city: DEFAULT_CITY.to_string(),
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "owmcheck", "owmcheck")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Override the stored API key with the `API_KEY` environment variable,
    /// if it is set and non-empty.
    pub fn apply_env(&mut self) {
        self.apply_key_override(env::var(API_KEY_VAR).ok());
    }

    fn apply_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
