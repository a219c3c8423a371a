//! # Client Configuration
//!
//! Configuration for the server under test.
//! Supports environment variables, config files, and in-code overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Connection settings for the CI server exercised by the test kit
///
/// # Examples
///
/// ```rust
/// use ci_api_testkit::config::ClientConfig;
///
/// // Default configuration
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, "http://localhost:8111");
/// assert_eq!(config.timeout_ms, 30000);
/// ```
///
/// ```rust,no_run
/// use ci_api_testkit::config::ClientConfig;
///
/// // Load configuration from environment and config files
/// let config = ClientConfig::load().expect("Failed to load config");
/// println!("Server URL: {}", config.base_url);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server under test (e.g., "<http://localhost:8111>")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Token for superuser-mode requests (if fixtures need one)
    pub superuser_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8111".to_string(),
            timeout_ms: 30000,
            superuser_token: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (~/.ci-testkit/config.toml)
    /// 3. Default values
    pub fn load() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    debug!("Failed to load config file: {}", e);
                    // Continue with defaults if config file fails
                }
            }
        }

        config.apply_env_overrides();

        debug!("Loaded client configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> ApiResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ApiError::config_error(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            // Current directory
            Path::new("./ci-testkit.toml"),
            Path::new("./config/ci-testkit.toml"),
            // User home directory
            &dirs::home_dir()?.join(".ci-testkit").join("config.toml"),
            &dirs::config_dir()?.join("ci-testkit").join("client.toml"),
        ];

        for path in &possible_paths {
            if path.exists() && path.is_file() {
                return Some(path.to_path_buf());
            }
        }

        None
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CI_TESTKIT_URL") {
            self.base_url = url;
        }
        if let Ok(timeout) = std::env::var("CI_TESTKIT_TIMEOUT_MS") {
            if let Ok(timeout_ms) = timeout.parse() {
                self.timeout_ms = timeout_ms;
            }
        }
        if let Ok(token) = std::env::var("CI_TESTKIT_SUPERUSER_TOKEN") {
            self.superuser_token = Some(token);
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ApiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ApiError::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ApiError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get default config file path
    pub fn default_config_path() -> ApiResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ApiError::config_error("Could not determine home directory"))?;

        Ok(home_dir.join(".ci-testkit").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8111");
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.superuser_token.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig {
            superuser_token: Some("fixture-token".to_string()),
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ClientConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.base_url, deserialized.base_url);
        assert_eq!(config.superuser_token, deserialized.superuser_token);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test-config.toml");

        let original_config = ClientConfig::default();
        original_config.save_to_file(&config_path).unwrap();

        let loaded_config = ClientConfig::load_from_file(&config_path).unwrap();
        assert_eq!(original_config.base_url, loaded_config.base_url);
        assert_eq!(original_config.timeout_ms, loaded_config.timeout_ms);
    }
}
