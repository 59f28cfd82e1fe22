//! Startup configuration read from a RON file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use serde::Deserialize;
use studygate_engine::ClientSettings;

pub const API_KEY_ENV: &str = "STUDYGATE_API_KEY";

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// A non-empty `env_key` replaces the file's key.
    pub fn with_api_key_override(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn client_settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            endpoint: self.endpoint.clone().unwrap_or(defaults.endpoint),
            api_key: self.api_key.clone().unwrap_or_default(),
            connect_timeout: self
                .connect_timeout_secs
                .map_or(defaults.connect_timeout, Duration::from_secs),
            request_timeout: self
                .request_timeout_secs
                .map_or(defaults.request_timeout, Duration::from_secs),
        }
    }
}

/// Reads `path`, falling back to defaults when the file does not exist.
pub fn load(path: &Path) -> Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            engine_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };

    let config: AppConfig =
        ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    engine_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Loads the file and applies the environment key override.
pub fn load_with_env(path: &Path) -> Result<AppConfig> {
    let config = load(path)?.with_api_key_override(std::env::var(API_KEY_ENV).ok());
    if config.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
        engine_warn!(
            "No API key configured; set api_key in {:?} or {}",
            path,
            API_KEY_ENV
        );
    }
    Ok(config)
}
