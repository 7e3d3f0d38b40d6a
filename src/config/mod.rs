//! Configuration management for EventBooker
//!
//! The config file is optional. Values resolve with the precedence
//! CLI flag > environment variable > config file > built-in default; clap
//! handles the first two, this module the rest.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};

/// API base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the EventBooker API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Directory holding local storage (session token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".eventbooker").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path_override: Option<&str>) -> Result<PathBuf> {
        match path_override {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path, falling back to defaults
    /// when the file does not exist.
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path_override)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Resolve the API base URL, preferring an explicit override.
    ///
    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn api_url(&self, url_override: Option<&str>) -> Result<String> {
        let url = url_override
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);

        reqwest::Url::parse(url)
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", url, e)))?;

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Resolve the output format, preferring an explicit override
    pub fn format(&self, format_override: Option<OutputFormat>) -> OutputFormat {
        format_override
            .or(self.preferences.format)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.storage_dir.is_none());
        assert!(config.preferences.format.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path().join("absent.yaml")).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_url: https://events.example.com/\nstorage_dir: /tmp/eb\npreferences:\n  format: json\n",
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();

        assert_eq!(config.api_url.as_deref(), Some("https://events.example.com/"));
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/eb")));
        assert_eq!(config.preferences.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: [unclosed").unwrap();

        let result = Config::load_from(path);
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_api_url_precedence() {
        let config = Config {
            api_url: Some("https://from-config.example.com".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.api_url(Some("http://override:8080/")).unwrap(),
            "http://override:8080"
        );
        assert_eq!(
            config.api_url(None).unwrap(),
            "https://from-config.example.com"
        );
        assert_eq!(Config::default().api_url(None).unwrap(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_rejects_garbage() {
        let config = Config::default();
        assert!(config.api_url(Some("not a url")).is_err());
    }

    #[test]
    fn test_format_precedence() {
        let config = Config {
            preferences: Preferences {
                format: Some(OutputFormat::Table),
            },
            ..Default::default()
        };

        assert_eq!(config.format(Some(OutputFormat::Json)), OutputFormat::Json);
        assert_eq!(config.format(None), OutputFormat::Table);
        assert_eq!(Config::default().format(None), OutputFormat::Pretty);
    }
}
