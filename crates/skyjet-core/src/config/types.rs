//! Configuration type definitions for the assistant engine.
//!
//! Every section is optional in YAML; an empty document yields the stock
//! widget (one-second simulated latency, Spanish greeting, executive mode,
//! recovery wrapper off).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::models::Mode;
use crate::domain::services::responses::{
    DEFAULT_FALLBACK_REPLY, DEFAULT_GREETING, DEFAULT_UNAVAILABLE_REPLY,
};
use crate::errors::AssistantError;

pub const DEFAULT_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkyjetConfig {
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub recovery: RecoveryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub default_mode: Mode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
    #[serde(default = "default_unavailable_reply")]
    pub unavailable_reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            greeting: default_greeting(),
            default_mode: Mode::default(),
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
            fallback_reply: default_fallback_reply(),
            unavailable_reply: default_unavailable_reply(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_retries() -> usize {
    2
}

fn default_backoff_ms() -> u64 {
    250
}

fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.to_string()
}

fn default_unavailable_reply() -> String {
    DEFAULT_UNAVAILABLE_REPLY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl SkyjetConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AssistantError> {
        if self.assistant.greeting.trim().is_empty() {
            return Err(AssistantError::ValidationError(
                "Assistant greeting cannot be empty".to_string(),
            ));
        }

        if self.recovery.timeout_ms == 0 {
            return Err(AssistantError::ValidationError(
                "Recovery timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.recovery.fallback_reply.trim().is_empty()
            || self.recovery.unavailable_reply.trim().is_empty()
        {
            return Err(AssistantError::ValidationError(
                "Recovery replies cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AssistantError::ValidationError(format!(
                "Invalid logging level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
