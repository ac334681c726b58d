use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::mealdb::DEFAULT_BASE_URL;
use crate::ui::theme::ThemePreset;

/// Search term standing in for "browse all" (the API has no list-all endpoint)
pub const DEFAULT_BROWSE_TERM: &str = "a";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Recipe API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of TheMealDB API, including the key segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Term used for the initial browse-all fetch
    #[serde(default = "default_browse_term")]
    pub browse_term: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            browse_term: default_browse_term(),
        }
    }
}

impl ApiConfig {
    /// Set the base URL; must be http(s), stored without a trailing slash
    pub fn set_base_url(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        let url = reqwest::Url::parse(value)?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must be an http(s) URL");
        }
        self.base_url = value.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Set the browse term; blank terms are rejected
    pub fn set_browse_term(&mut self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            anyhow::bail!("api.browse_term cannot be blank");
        }
        self.browse_term = value.to_string();
        Ok(())
    }

    /// Re-check values edited in place, normalizing them as the setters do
    pub fn validate(&mut self) -> Result<()> {
        let base_url = self.base_url.clone();
        self.set_base_url(&base_url)?;
        let browse_term = self.browse_term.clone();
        self.set_browse_term(&browse_term)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_browse_term() -> String {
    DEFAULT_BROWSE_TERM.to_string()
}

/// Window appearance settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme preset
    #[serde(default)]
    pub theme: ThemePreset,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "mealdeck", "Mealdeck")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, using defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.browse_term, "a");
        assert_eq!(config.ui.theme, ThemePreset::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbrowse_term = \"b\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.browse_term, "b");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "http://localhost:8080/api".into();
        config.ui.theme = ThemePreset::Herb;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:8080/api");
        assert_eq!(loaded.ui.theme, ThemePreset::Herb);
    }

    #[test]
    fn test_api_setters_validate_before_assigning() {
        let mut api = ApiConfig::default();
        assert!(api.set_base_url("ftp://example.com").is_err());
        assert!(api.set_base_url("not a url").is_err());
        assert!(api.set_browse_term("   ").is_err());
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert_eq!(api.browse_term, "a");

        api.set_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_validate_checks_in_place_edits() {
        let mut api = ApiConfig::default();
        api.base_url = "https://example.com/api/".into();
        api.validate().unwrap();
        assert_eq!(api.base_url, "https://example.com/api");

        api.browse_term = String::new();
        assert!(api.validate().is_err());

        let mut api = ApiConfig::default();
        api.base_url = "mailto:chef@example.com".into();
        assert!(api.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
