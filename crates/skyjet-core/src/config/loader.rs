//! Configuration loader for YAML files and environment overrides
//!
//! Values are resolved in three layers: built-in defaults, the YAML
//! document, then `SKYJET_*` environment variables.

use std::env;
use std::path::Path;

use tokio::fs;

use crate::config::types::*;
use crate::domain::models::Mode;
use crate::errors::AssistantError;

pub const ENV_LATENCY_MS: &str = "SKYJET_LATENCY_MS";
pub const ENV_DEFAULT_MODE: &str = "SKYJET_DEFAULT_MODE";
pub const ENV_LOG_LEVEL: &str = "SKYJET_LOG_LEVEL";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<SkyjetConfig, AssistantError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            AssistantError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::info!("Loaded configuration from {}", path.display());
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<SkyjetConfig, AssistantError> {
        let mut config: SkyjetConfig = if content.trim().is_empty() {
            SkyjetConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::resolve_environment(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults. Environment
    /// overrides apply either way.
    pub async fn load_or_default(path: Option<&Path>) -> Result<SkyjetConfig, AssistantError> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_str(""),
        }
    }

    fn resolve_environment(config: &mut SkyjetConfig) -> Result<(), AssistantError> {
        if let Ok(latency) = env::var(ENV_LATENCY_MS) {
            config.assistant.latency_ms = latency.trim().parse::<u64>().map_err(|e| {
                AssistantError::ConfigError(format!(
                    "Invalid {} value '{}': {}",
                    ENV_LATENCY_MS, latency, e
                ))
            })?;
        }

        if let Ok(mode) = env::var(ENV_DEFAULT_MODE) {
            config.assistant.default_mode = Mode::parse(&mode).ok_or_else(|| {
                AssistantError::ConfigError(format!(
                    "Invalid {} value '{}', expected executive, medical or incucai",
                    ENV_DEFAULT_MODE, mode
                ))
            })?;
        }

        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                config.logging.level = level.trim().to_string();
            }
        }

        Ok(())
    }
}
