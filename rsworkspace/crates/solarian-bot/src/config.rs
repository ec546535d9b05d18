//! Configuration management for solarian-bot

#[path = "config_tests.rs"]
mod config_tests;

use std::fmt;
use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_GIPHY_BASE_URL: &str = "https://api.giphy.com";
pub const DEFAULT_INVENTORY_BASE_URL: &str = "http://dev1.solarians.click:8883";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Source of environment variables, swappable in tests.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Complete bot configuration, read from `config.json`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bot token from the Discord developer portal
    pub token: String,
    #[serde(rename = "giphyAPIKey", alias = "giphyApiKey")]
    pub giphy_api_key: String,
    /// Command prefix, `!` unless configured
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(rename = "giphyBaseUrl", default = "default_giphy_base_url")]
    pub giphy_base_url: String,
    /// Serves both `/api/mints` and `/render/<mint>.gif`
    #[serde(rename = "inventoryBaseUrl", default = "default_inventory_base_url")]
    pub inventory_base_url: String,
    #[serde(rename = "httpTimeoutSecs", default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("giphy_api_key", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("giphy_base_url", &self.giphy_base_url)
            .field("inventory_base_url", &self.inventory_base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self> {
        let token = env
            .var("DISCORD_BOT_TOKEN")
            .context("DISCORD_BOT_TOKEN not set")?;
        let giphy_api_key = env.var("GIPHY_API_KEY").context("GIPHY_API_KEY not set")?;

        Ok(Config {
            token,
            giphy_api_key,
            prefix: env.var("BOT_PREFIX").unwrap_or_else(default_prefix),
            giphy_base_url: env
                .var("GIPHY_BASE_URL")
                .unwrap_or_else(default_giphy_base_url),
            inventory_base_url: env
                .var("INVENTORY_BASE_URL")
                .unwrap_or_else(default_inventory_base_url),
            http_timeout_secs: env
                .var("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Timeout applied to every upstream HTTP request. Zero falls back to
    /// the default rather than disabling it.
    pub fn http_timeout(&self) -> Duration {
        match self.http_timeout_secs {
            0 => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_giphy_base_url() -> String {
    DEFAULT_GIPHY_BASE_URL.to_string()
}

fn default_inventory_base_url() -> String {
    DEFAULT_INVENTORY_BASE_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
