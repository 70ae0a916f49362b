//! Application configuration
//!
//! Configuration loaded from `.school-desk.toml`, with environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding [`AppConfig::base_url`]
pub const ENV_BASE_URL: &str = "SCHOOL_API_BASE_URL";
/// Environment variable overriding [`AppConfig::school_id`]
pub const ENV_SCHOOL_ID: &str = "SCHOOL_ID";
/// Environment variable overriding [`AppConfig::api_token`]
pub const ENV_API_TOKEN: &str = "SCHOOL_API_TOKEN";

/// Application configuration loaded from .school-desk.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// School the dashboards operate on
    #[serde(default)]
    pub school_id: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Timeout for the bulk salary payment call, in seconds
    #[serde(default = "default_bulk_payment_timeout_secs")]
    pub bulk_payment_timeout_secs: u64,

    /// User agent sent to the backend
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    crate::DEFAULT_BASE_URL.to_string()
}

fn default_bulk_payment_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("school-desk/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            school_id: String::new(),
            api_token: None,
            bulk_payment_timeout_secs: default_bulk_payment_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD, then home directory) or defaults, then
    /// apply environment overrides
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::from_file();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Override fields from `lookup` (normally the process environment)
    ///
    /// Blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = value(ENV_BASE_URL) {
            log::debug!("{} overrides base_url", ENV_BASE_URL);
            self.base_url = base_url;
        }
        if let Some(school_id) = value(ENV_SCHOOL_ID) {
            self.school_id = school_id;
        }
        if let Some(token) = value(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
    }

    pub fn bulk_payment_timeout(&self) -> Duration {
        Duration::from_secs(self.bulk_payment_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, crate::DEFAULT_BASE_URL);
        assert!(config.school_id.is_empty());
        assert!(config.api_token.is_none());
        assert_eq!(config.bulk_payment_timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("school-desk/"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            base_url = "https://api.example-school.org"
            school_id = "sch-42"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://api.example-school.org");
        assert_eq!(config.school_id, "sch-42");
        // Other fields should use defaults
        assert_eq!(config.bulk_payment_timeout_secs, 30);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://10.0.0.2:4000"),
            (ENV_SCHOOL_ID, "  "),
            (ENV_API_TOKEN, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig {
            school_id: "from-file".to_string(),
            ..AppConfig::default()
        };
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://10.0.0.2:4000");
        // Blank override keeps the file value
        assert_eq!(config.school_id, "from-file");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }
}
