//! Configuration loading for the MOTD service.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_greeting_delay_secs() -> u64 {
    5
}

/// Message of the Day service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MotdConfig {
    /// Address greetings are sent from (e.g., "chat.straylight.net").
    pub server_address: String,
    /// Seconds to wait after session creation before delivering the greeting.
    #[serde(default = "default_greeting_delay_secs")]
    pub greeting_delay_secs: u64,
}

impl MotdConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: MotdConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// The greeting delay as a [`Duration`].
    pub fn greeting_delay(&self) -> Duration {
        Duration::from_secs(self.greeting_delay_secs)
    }
}
