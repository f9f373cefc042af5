use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

/// Credentials for a single upstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCredentials {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
///
/// The weather credential is required to build a provider; the news
/// credential is optional — without it the news path serves the bundled
/// fallback headlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bound on every outbound HTTP request, seconds.
    /// Scalar fields stay ahead of the tables for TOML serialization.
    pub request_timeout_secs: u64,

    /// How long fetched headlines stay fresh, seconds.
    pub news_ttl_secs: i64,

    /// Example TOML:
    /// [open_weather]
    /// api_key = "..."
    pub open_weather: Option<ProviderCredentials>,

    pub news: Option<ProviderCredentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            news_ttl_secs: 3600,
            open_weather: None,
            news: None,
        }
    }
}

impl Config {
    pub fn open_weather_api_key(&self) -> Option<&str> {
        self.open_weather.as_ref().map(|c| c.api_key.as_str())
    }

    pub fn news_api_key(&self) -> Option<&str> {
        self.news.as_ref().map(|c| c.api_key.as_str())
    }

    pub fn set_open_weather_key(&mut self, api_key: String) {
        self.open_weather = Some(ProviderCredentials { api_key });
    }

    pub fn set_news_key(&mut self, api_key: Option<String>) {
        self.news = api_key.map(|api_key| ProviderCredentials { api_key });
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
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
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_credentials_and_sane_bounds() {
        let cfg = Config::default();

        assert!(cfg.open_weather_api_key().is_none());
        assert!(cfg.news_api_key().is_none());
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.news_ttl_secs, 3600);
    }

    #[test]
    fn set_and_read_back_keys() {
        let mut cfg = Config::default();

        cfg.set_open_weather_key("OW_KEY".to_string());
        cfg.set_news_key(Some("NEWS_KEY".to_string()));

        assert_eq!(cfg.open_weather_api_key(), Some("OW_KEY"));
        assert_eq!(cfg.news_api_key(), Some("NEWS_KEY"));
    }

    #[test]
    fn clearing_news_key_is_allowed() {
        let mut cfg = Config::default();

        cfg.set_news_key(Some("NEWS_KEY".to_string()));
        cfg.set_news_key(None);

        assert!(cfg.news_api_key().is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [open_weather]
            api_key = "OW_KEY"
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.open_weather_api_key(), Some("OW_KEY"));
        assert!(cfg.news_api_key().is_none());
        assert_eq!(cfg.news_ttl_secs, 3600);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_open_weather_key("OW_KEY".to_string());

        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");

        assert_eq!(parsed.open_weather_api_key(), Some("OW_KEY"));
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }
}
