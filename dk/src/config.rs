//! Donekeeper configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trello API access
    pub trello: TrelloConfig,

    /// Post-creation propagation polling
    pub propagation: PropagationConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .donekeeper.yml
        let local_config = PathBuf::from(".donekeeper.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/donekeeper/donekeeper.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("donekeeper").join("donekeeper.yml");
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

    /// Validate configuration before use
    ///
    /// Call this early in startup to fail fast with a clear error message.
    pub fn validate(&self) -> Result<()> {
        self.trello.resolve_app_key()?;
        Ok(())
    }
}

/// Trello API access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrelloConfig {
    /// Application key, inline
    #[serde(rename = "app-key")]
    pub app_key: Option<String>,

    /// Environment variable holding the application key
    #[serde(rename = "app-key-env")]
    pub app_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            app_key: None,
            app_key_env: "TRELLO_APP_KEY".to_string(),
            base_url: "https://api.trello.com/1".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl TrelloConfig {
    /// The application key, from the config or the environment
    pub fn resolve_app_key(&self) -> Result<String> {
        if let Some(key) = &self.app_key {
            return Ok(key.clone());
        }
        std::env::var(&self.app_key_env).map_err(|_| {
            eyre::eyre!(
                "Trello app key not found. Set the {} environment variable or the app-key config field.",
                self.app_key_env
            )
        })
    }
}

/// How long to keep re-fetching after a list creation before giving up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Maximum number of re-fetches
    #[serde(rename = "poll-attempts")]
    pub poll_attempts: u32,

    /// Delay between re-fetches in milliseconds
    #[serde(rename = "poll-delay-ms")]
    pub poll_delay_ms: u64,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            poll_attempts: 10,
            poll_delay_ms: 500,
        }
    }
}

impl PropagationConfig {
    /// Convert to the planner's poll settings
    pub fn to_poll(&self) -> crate::planner::PropagationPoll {
        crate::planner::PropagationPoll {
            attempts: self.poll_attempts,
            delay: std::time::Duration::from_millis(self.poll_delay_ms),
        }
    }
}
