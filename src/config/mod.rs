//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::DEFAULT_API_BASE;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "TUNINGSEARCH_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TuningSearch API key. Read once at startup and threaded into every
    /// tool call; serving is refused without it.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL (override for self-hosted gateways and tests)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            api_base: std::env::var("TUNINGSEARCH_API_BASE")
                .unwrap_or_else(|_| default_api_base()),
            timeout_secs: std::env::var("TUNINGSEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Load configuration from a file, layered under `TUNINGSEARCH_*` env vars
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("TUNINGSEARCH"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config {
            api_key: None,
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        };
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"api_key":"sk-test"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
