use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::notify::DEFAULT_TOAST_SECS;
use crate::rotator::{DEFAULT_INTERVAL_SECS, MAX_INTERVAL_SECS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fact_interval_secs must be at least 1")]
    ZeroFactInterval,
    #[error("fact_interval_secs must be at most {}", MAX_INTERVAL_SECS)]
    FactIntervalTooLong,
    #[error("toast_secs must be at least 1")]
    ZeroToastDuration,
}

/// Optional color overrides, as `#RRGGBB` or `#RGB`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Seconds between fact rotations
    #[serde(default = "default_fact_interval")]
    pub fact_interval_secs: u64,

    /// Seconds a toast stays in the status line
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,

    /// Also send toasts to the desktop notification daemon
    #[serde(default)]
    pub desktop_notifications: bool,

    #[serde(default)]
    pub theme: ThemeOverrides,
}

fn default_fact_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

fn default_toast_secs() -> u64 {
    DEFAULT_TOAST_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fact_interval_secs: DEFAULT_INTERVAL_SECS,
            toast_secs: DEFAULT_TOAST_SECS,
            desktop_notifications: false,
            theme: ThemeOverrides::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("whiskers");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
            return Ok(AppConfig::default());
        }

        let config = AppConfig::default();
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
        Ok(config)
    }

    /// Parse TOML and replace invalid values with their defaults
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.fact_interval_secs == 0 {
            return Err(ConfigError::ZeroFactInterval);
        }
        if self.fact_interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::FactIntervalTooLong);
        }
        if self.toast_secs == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        Ok(())
    }

    /// Reset every invalid field to its default, logging each one
    pub fn sanitize(&mut self) {
        while let Err(e) = self.validate() {
            tracing::warn!("Invalid config ({}), using default", e);
            match e {
                ConfigError::ZeroFactInterval | ConfigError::FactIntervalTooLong => {
                    self.fact_interval_secs = DEFAULT_INTERVAL_SECS
                }
                ConfigError::ZeroToastDuration => self.toast_secs = DEFAULT_TOAST_SECS,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            fact_interval_secs: 10,
            toast_secs: 2,
            desktop_notifications: true,
            theme: ThemeOverrides {
                accent: Some("#6b21a8".to_string()),
                heart: None,
                text: None,
                text_dim: None,
                border: Some("#ccc".to_string()),
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fact_interval_secs, 5);
        assert_eq!(config.toast_secs, 3);
    }

    #[test]
    fn test_zero_values_are_rejected_and_replaced() {
        let raw: AppConfig = toml::from_str("fact_interval_secs = 0\ntoast_secs = 0").unwrap();
        assert_eq!(raw.validate(), Err(ConfigError::ZeroFactInterval));

        let config = AppConfig::parse("fact_interval_secs = 0\ntoast_secs = 0").unwrap();
        assert_eq!(config.fact_interval_secs, DEFAULT_INTERVAL_SECS);
        assert_eq!(config.toast_secs, DEFAULT_TOAST_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlong_interval_is_rejected_and_replaced() {
        let mut config = AppConfig {
            fact_interval_secs: u64::MAX,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FactIntervalTooLong));

        config.sanitize();
        assert_eq!(config.fact_interval_secs, DEFAULT_INTERVAL_SECS);

        let config = AppConfig::parse(&format!("fact_interval_secs = {}", MAX_INTERVAL_SECS)).unwrap();
        assert_eq!(config.fact_interval_secs, MAX_INTERVAL_SECS);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(AppConfig::parse("fact_interval_secs = \"soon\"").is_err());
    }
}
