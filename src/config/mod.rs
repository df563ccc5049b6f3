use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

const APP_NAME: &str = "game-tracker";

pub const ITAD_API_KEY_VAR: &str = "ITAD_API_KEY";
pub const EXCHANGE_API_KEY_VAR: &str = "EXCHANGE_API_KEY";
pub const ITAD_URL_VAR: &str = "GAME_TRACKER_ITAD_URL";
pub const EXCHANGE_URL_VAR: &str = "GAME_TRACKER_EXCHANGE_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Secrets never come from the config file, only from the environment.
    #[serde(skip)]
    pub itad_api_key: String,
    #[serde(skip)]
    pub exchange_api_key: String,
    #[serde(default = "default_itad_base_url")]
    pub itad_base_url: String,
    #[serde(default = "default_exchange_base_url")]
    pub exchange_base_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_itad_base_url() -> String {
    "https://api.isthereanydeal.com".to_string()
}

fn default_exchange_base_url() -> String {
    "https://v6.exchangerate-api.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            itad_api_key: String::new(),
            exchange_api_key: String::new(),
            itad_base_url: default_itad_base_url(),
            exchange_base_url: default_exchange_base_url(),
            log_level: default_log_level(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load `.env`, the optional config file and the process environment, in that order.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Failed to read .env file: {}", e),
        }

        let config_path = Self::config_path()?;
        Self::load_from(&config_path, |key| std::env::var(key).ok())
    }

    /// Build a config from a (possibly missing) file and an environment lookup.
    pub fn load_from<F>(config_path: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            log::debug!("Reading configuration from {}", config_path.display());
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };

        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(contents)?)
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Missing keys are left empty and surface later as request failures.
        self.itad_api_key = env(ITAD_API_KEY_VAR).unwrap_or_default();
        self.exchange_api_key = env(EXCHANGE_API_KEY_VAR).unwrap_or_default();

        if let Some(url) = env(ITAD_URL_VAR) {
            self.itad_base_url = url;
        }
        if let Some(url) = env(EXCHANGE_URL_VAR) {
            self.exchange_base_url = url;
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        for (name, url) in [
            ("itad_base_url", &self.itad_base_url),
            ("exchange_base_url", &self.exchange_base_url),
        ] {
            if let Err(e) = reqwest::Url::parse(url) {
                return Err(Error::Config(format!("Invalid {}: '{}' ({})", name, url, e)));
            }
        }

        if self.request_timeout_secs == Some(0) {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
