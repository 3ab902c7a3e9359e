//! Configuration loading.
//!
//! Settings live in `<config_dir>/skycast/config.toml`. Everything has a
//! default, so a missing file is not an error; the API key may also come
//! from the `SKYCAST_API_KEY` environment variable. The key and default
//! location are injected into the client and screens at startup, never
//! read as ambient globals.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

const CONFIG_DIR: &str = "skycast";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// weatherapi.com API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Location every screen fetches on mount.
    #[serde(default = "default_location")]
    pub default_location: String,
    /// Day count for the forecast endpoint.
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_location() -> String {
    "London".to_string()
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_location: default_location(),
            forecast_days: default_forecast_days(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Key resolution: config file first, then the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SKYCAST_API_KEY").ok())
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config, falling back to defaults when no file exists.
pub fn load() -> color_eyre::Result<AppConfig> {
    let Some(path) = config_path() else {
        debug!("no config directory found, using defaults");
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    debug!(?path, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.default_location, "London");
        assert_eq!(config.forecast_days, 3);
        assert_eq!(config.theme.name, "Catppuccin Mocha");
    }

    #[test]
    fn full_file_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            api_key = "abc123"
            default_location = "Tokyo"
            forecast_days = 5

            [theme]
            name = "Catppuccin Latte"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.default_location, "Tokyo");
        assert_eq!(config.forecast_days, 5);
        assert_eq!(config.theme.name, "Catppuccin Latte");
    }

    #[test]
    fn configured_key_wins_over_environment() {
        let config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("from-file"));
    }
}
