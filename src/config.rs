//! Configuration module
//!
//! Loads settings from an optional JSON file, with the FRED API key
//! overridable through the `FRED_API_KEY` environment variable.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker thread count (0 means one per CPU core)
    #[serde(default)]
    pub workers: usize,
}

/// Upstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// FRED API key (required for the rates panel; requests fail without it)
    #[serde(default)]
    pub fred_api_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_connect_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            fred_api_key: String::new(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration: file first, defaults otherwise, env key on top.
    pub fn load() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        let mut config = Self::default();
        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(loaded) => {
                        log::info!("loaded configuration from {}", path);
                        config = loaded;
                        break;
                    }
                    Err(e) => {
                        log::warn!("failed to load config file {}: {}", path, e);
                    }
                }
            }
        }

        if let Ok(key) = env::var("FRED_API_KEY") {
            config.api.fred_api_key = key;
        }
        if config.api.fred_api_key.is_empty() {
            log::warn!("no FRED API key configured; rate fetches will fail");
        }

        config
    }

    /// Server bind address as host:port.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.workers, 0);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert!(config.api.fred_api_key.is_empty());
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let raw = r#"{"server": {"port": 9000}, "api": {"fred_api_key": "abc"}}"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.api.fred_api_key, "abc");
        assert_eq!(config.api.timeout_secs, 30);
    }
}
