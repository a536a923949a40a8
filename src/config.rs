use std::str::FromStr;

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, STORAGE_KEY_CONFIG};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url_development: BACKEND_URL.to_string(),
            backend_url_production: BACKEND_URL.to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Optional runtime overrides, read from localStorage as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: BACKEND_URL.to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Compile-time configuration with any stored overrides on top.
    pub fn load() -> Self {
        let overrides = LocalStorage::get::<ConfigOverrides>(STORAGE_KEY_CONFIG).unwrap_or_default();
        Self::from_env().with_overrides(overrides)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(environment) = overrides.environment {
            self.environment = environment;
        }
        if let Some(url) = overrides.backend_url {
            // an explicit URL applies to whichever environment is active
            if self.is_production() {
                self.backend_url_production = url;
            } else {
                self.backend_url_development = url;
            }
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        if self.is_production() {
            &self.backend_url_production
        } else {
            &self.backend_url_development
        }
    }

    /// Falls back to `Info` on an unparsable level.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: ClientConfig = ClientConfig::load();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = ClientConfig {
            backend_url_development: "http://dev".into(),
            backend_url_production: "https://prod".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.backend_url(), "http://dev");
        config.environment = "production".into();
        assert_eq!(config.backend_url(), "https://prod");
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let base = ClientConfig::default();
        let overridden = base.clone().with_overrides(ConfigOverrides {
            backend_url: Some("http://10.0.0.2:8080".into()),
            ..ConfigOverrides::default()
        });
        assert_eq!(overridden.backend_url(), "http://10.0.0.2:8080");
        assert_eq!(overridden.log_level, base.log_level);
        assert_eq!(overridden.environment, base.environment);
    }

    #[test]
    fn overridden_environment_receives_overridden_url() {
        let config = ClientConfig::default().with_overrides(ConfigOverrides {
            backend_url: Some("https://tables.example".into()),
            environment: Some("production".into()),
            log_level: None,
        });
        assert!(config.is_production());
        assert_eq!(config.backend_url(), "https://tables.example");
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let mut config = ClientConfig::default();
        config.log_level = "DEBUG".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn overrides_parse_from_partial_json() {
        let overrides: ConfigOverrides = serde_json::from_str(r#"{"log_level":"warn"}"#).unwrap();
        assert_eq!(overrides.log_level.as_deref(), Some("warn"));
        assert!(overrides.backend_url.is_none());
    }
}
