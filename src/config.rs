use crate::constants;
use crate::error::{AqiError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything the pipeline needs at runtime. Components receive the relevant
/// pieces at construction; nothing reads config globals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV file holding the historical readings.
    pub store_path: String,
    /// CSV file the exporter regenerates for the map renderer.
    pub export_path: String,
    /// WAQI API token. `WAQI_API_TOKEN` in the environment wins over the file.
    pub token: String,
    /// Ordered list of location keys to query each run.
    pub locations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: constants::DEFAULT_STORE_PATH.to_string(),
            export_path: constants::DEFAULT_EXPORT_PATH.to_string(),
            token: String::new(),
            locations: constants::default_locations(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AqiError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Loads `path` when it exists, compiled defaults otherwise. The env
    /// token override applies either way.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            let mut config = Config::default();
            config.apply_env();
            Ok(config)
        }
    }

    fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(constants::TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                self.token = token;
            }
        }
    }
}
