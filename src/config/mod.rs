use crate::constants;
use crate::error::PlaytomicError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration for the Playtomic client.
/// Handles loading, saving, and managing connection settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the Playtomic API. Should include https:// prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `PLAYTOMIC_API_URL` - Override API base URL
    /// - `PLAYTOMIC_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(ClientConfig)` - Successfully loaded configuration
    /// * `Err(PlaytomicError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, PlaytomicError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Loads configuration from an explicit file path, applying env overrides
    /// and validation the same way as [`ClientConfig::load`].
    pub async fn load_from_path(config_path: &str) -> Result<Self, PlaytomicError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            ClientConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides config values with environment variables if present
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(constants::env_vars::API_URL) {
            self.base_url = base_url;
        }

        if let Some(timeout) = std::env::var(constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(PlaytomicError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), PlaytomicError> {
        validate_config(&self.base_url, self.http_timeout_seconds)
    }

    /// Saves the configuration to the default config file location.
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self) -> Result<(), PlaytomicError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves the configuration to an explicit file path.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), PlaytomicError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_file_uses_defaults() {
        unsafe {
            std::env::remove_var(constants::env_vars::API_URL);
            std::env::remove_var(constants::env_vars::HTTP_TIMEOUT);
        }

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.toml");
        let config = ClientConfig::load_from_path(path.to_str().unwrap())
            .await
            .expect("Load should fall back to defaults");

        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
    }

    #[tokio::test]
    #[serial]
    async fn test_save_and_load_roundtrip() {
        unsafe {
            std::env::remove_var(constants::env_vars::API_URL);
            std::env::remove_var(constants::env_vars::HTTP_TIMEOUT);
        }

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config = ClientConfig {
            base_url: "https://sandbox.playtomic.io".to_string(),
            http_timeout_seconds: 10,
        };
        config.save_to_path(path_str).await.expect("Save failed");

        let loaded = ClientConfig::load_from_path(path_str)
            .await
            .expect("Load failed");
        assert_eq!(loaded.base_url, "https://sandbox.playtomic.io");
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_beat_file_values() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config = ClientConfig {
            base_url: "https://file.playtomic.io".to_string(),
            http_timeout_seconds: 10,
        };
        config.save_to_path(path_str).await.expect("Save failed");

        unsafe {
            std::env::set_var(constants::env_vars::API_URL, "https://env.playtomic.io");
            std::env::set_var(constants::env_vars::HTTP_TIMEOUT, "5");
        }

        let loaded = ClientConfig::load_from_path(path_str)
            .await
            .expect("Load failed");

        unsafe {
            std::env::remove_var(constants::env_vars::API_URL);
            std::env::remove_var(constants::env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(loaded.base_url, "https://env.playtomic.io");
        assert_eq!(loaded.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_file_config_rejected() {
        unsafe {
            std::env::remove_var(constants::env_vars::API_URL);
            std::env::remove_var(constants::env_vars::HTTP_TIMEOUT);
        }

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config = ClientConfig {
            base_url: String::new(),
            http_timeout_seconds: 30,
        };
        config.save_to_path(path_str).await.expect("Save failed");

        let result = ClientConfig::load_from_path(path_str).await;
        assert!(result.is_err());
    }
}
