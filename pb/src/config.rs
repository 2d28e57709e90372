//! PushBoard configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::board::BoardConfig;
use crate::pusher::{Credentials, Proxy};

/// Main PushBoard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Task document storage
    pub storage: StorageConfig,

    /// Device login material
    pub network: NetworkConfig,

    /// Optional jumphost for targets that are not directly reachable
    pub proxy: Option<ProxyConfig>,

    /// Board channel sizing
    pub board: BoardConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .pushboard.yml
        let local_config = PathBuf::from(".pushboard.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/pushboard/pushboard.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pushboard").join("pushboard.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Task document storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the task document
    #[serde(rename = "board-path")]
    pub board_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/pushboard on Linux)
        let board_path = dirs::data_dir()
            .map(|d| d.join("pushboard"))
            .unwrap_or_else(|| PathBuf::from(".pushboard"))
            .join("board.json");

        Self { board_path }
    }
}

/// Device login material. The password itself never lives in the config
/// file, only the name of the environment variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Login username for target devices
    pub username: String,

    /// Environment variable containing the login password
    #[serde(rename = "password-env")]
    pub password_env: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password_env: "PUSHBOARD_PASSWORD".to_string(),
        }
    }
}

impl NetworkConfig {
    /// Resolve login material, reading the password from the configured
    /// environment variable.
    pub fn resolve(&self) -> Result<Credentials> {
        let password = std::env::var(&self.password_env).map_err(|_| {
            eyre::eyre!(
                "Device password not found. Set the {} environment variable.",
                self.password_env
            )
        })?;
        Ok(Credentials {
            username: self.username.clone(),
            password,
        })
    }
}

/// Jumphost configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Jumphost address
    pub host: String,

    /// Login username on the jumphost
    pub username: String,

    /// Environment variable containing the jumphost password
    #[serde(rename = "password-env")]
    pub password_env: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: "admin".to_string(),
            password_env: "PUSHBOARD_PROXY_PASSWORD".to_string(),
        }
    }
}

impl ProxyConfig {
    /// Resolve the jumphost hop, reading its password from the configured
    /// environment variable.
    pub fn resolve(&self) -> Result<Proxy> {
        if self.host.trim().is_empty() {
            return Err(eyre::eyre!("Proxy host is not set"));
        }
        let password = std::env::var(&self.password_env).map_err(|_| {
            eyre::eyre!(
                "Proxy password not found. Set the {} environment variable.",
                self.password_env
            )
        })?;
        Ok(Proxy {
            host: self.host.clone(),
            username: self.username.clone(),
            password,
        })
    }
}
