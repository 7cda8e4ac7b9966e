use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::display::DisplayConfig;
use self::log::{LogConfig, LogFormat};

pub mod api;
pub mod display;
pub mod log;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `JISHO_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);
        config
    }

    /// Load a JSON config file, then apply environment overrides on top
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_overrides(|key| env::var(key).ok());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_url) = lookup("JISHO_API_URL") {
            self.api.api_url = api_url;
        }

        if let Some(base) = lookup("JISHO_WORD_URL_BASE") {
            self.api.word_url_base = base;
        }

        if let Some(timeout) = lookup("JISHO_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.api.timeout_seconds = timeout;
        }

        if let Some(max_results) = lookup("JISHO_MAX_RESULTS").and_then(|v| v.parse().ok()) {
            self.display.max_results = max_results;
        }

        if let Some(max_senses) = lookup("JISHO_MAX_SENSES").and_then(|v| v.parse().ok()) {
            self.display.max_senses = Some(max_senses);
        }

        match lookup("JISHO_LOG_FORMAT").map(|v| v.parse::<LogFormat>()) {
            Some(Ok(format)) => self.log.format = format,
            Some(Err(e)) => tracing::warn!("Ignoring JISHO_LOG_FORMAT: {e}"),
            None => {}
        }
    }
}
