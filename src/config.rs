//! Configuration handling for the page layer.
//!
//! Configuration is stored in `quickdesk.yaml` and includes:
//! - Base URL of the ticketing server
//! - Notification dismiss duration override

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notify::DISMISS_AFTER;

pub const CONFIG_FILE: &str = "quickdesk.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Ticketing server endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL the status updates are posted to
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: "http://127.0.0.1:5000/".to_string(),
        }
    }
}

/// Notification presenter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible, in milliseconds
    pub dismiss_after_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            dismiss_after_ms: DISMISS_AFTER.as_millis() as u64,
        }
    }
}

impl Config {
    /// Load configuration from a file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.notifications.dismiss_after_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000/");
        assert_eq!(config.dismiss_after(), Duration::from_millis(3000));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000/");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.server.base_url = "https://tickets.example.com/".to_string();
        config.notifications.dismiss_after_ms = 5000;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.base_url, "https://tickets.example.com/");
        assert_eq!(loaded.dismiss_after(), Duration::from_millis(5000));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_yaml_ng::from_str("server:\n  base_url: http://sv/\n").unwrap();
        assert_eq!(config.server.base_url, "http://sv/");
        assert_eq!(config.notifications.dismiss_after_ms, 3000);
    }
}
