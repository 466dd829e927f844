// ABOUTME: Agent runtime configuration: language model settings, tracing project, log level
// ABOUTME: Loaded from the environment and handed explicitly to the agent layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Settings consumed by the external supervisor/specialist agents.
//!
//! Calculators never see this struct; they only receive
//! [`IntelligenceConfig`](fitness_intelligence::IntelligenceConfig).

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
/// Default completion token budget
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Default tracing endpoint
pub const DEFAULT_TRACING_ENDPOINT: &str = "https://api.smith.langchain.com";
/// Default tracing project name
pub const DEFAULT_TRACING_PROJECT: &str = "fitness-ai-orchestration";

/// Log levels accepted by the agent runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentLogLevel {
    /// Verbose diagnostics
    Debug,
    /// Normal operation
    #[default]
    Info,
    /// Recoverable problems
    Warning,
    /// Failed operations
    Error,
    /// Unrecoverable failures
    Critical,
}

impl AgentLogLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Equivalent `tracing` filter directive
    #[must_use]
    pub const fn tracing_directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl FromStr for AgentLogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(AppError::config(format!(
                "Invalid log level '{s}'. Must be one of: DEBUG, INFO, WARNING, ERROR, CRITICAL"
            ))),
        }
    }
}

impl fmt::Display for AgentLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language model and agent runtime configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Chat model name
    pub model: String,
    /// Sampling temperature (0.0-1.0)
    pub temperature: f64,
    /// Maximum completion tokens
    pub max_tokens: u32,
    /// Model provider API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Whether run tracing is enabled
    pub tracing_enabled: bool,
    /// Tracing endpoint
    pub tracing_endpoint: String,
    /// Tracing API key
    #[serde(skip_serializing)]
    pub tracing_api_key: Option<String>,
    /// Tracing project name
    pub tracing_project: String,
    /// Extra diagnostics in agent output
    pub debug_mode: bool,
    /// Agent runtime log level
    pub log_level: AgentLogLevel,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key: None,
            tracing_enabled: true,
            tracing_endpoint: DEFAULT_TRACING_ENDPOINT.to_owned(),
            tracing_api_key: None,
            tracing_project: DEFAULT_TRACING_PROJECT.to_owned(),
            debug_mode: false,
            log_level: AgentLogLevel::Info,
        }
    }
}

impl AgentConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first;
    /// variables already set in the process environment win.
    /// A missing API key is allowed here; call [`Self::require_api_key`] where
    /// one is needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable does not parse, the log
    /// level is unknown, or the result fails [`Self::validate`]
    pub fn from_env() -> AppResult<Self> {
        let _ = load_dotenv();
        let config = Self {
            model: env_var_or("OPENAI_MODEL", DEFAULT_MODEL),
            temperature: parse_env("OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: parse_env("OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            api_key: non_empty_env("OPENAI_API_KEY"),
            tracing_enabled: env_flag("LANGCHAIN_TRACING_V2", true),
            tracing_endpoint: env_var_or("LANGCHAIN_ENDPOINT", DEFAULT_TRACING_ENDPOINT),
            tracing_api_key: non_empty_env("LANGCHAIN_API_KEY"),
            tracing_project: env_var_or("LANGCHAIN_PROJECT", DEFAULT_TRACING_PROJECT),
            debug_mode: env_flag("DEBUG_MODE", false),
            log_level: env::var("LOG_LEVEL")
                .ok()
                .map(|raw| raw.parse())
                .transpose()?
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a temperature outside 0-1, zero max tokens,
    /// or an empty model name
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(AppError::config(format!(
                "Temperature must be between 0 and 1, got {}",
                self.temperature
            )));
        }
        if self.max_tokens < 1 {
            return Err(AppError::config("Max tokens must be positive"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config("Model name must not be empty"));
        }
        Ok(())
    }

    /// API key, or an error when none is configured
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `OPENAI_API_KEY` was not set
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config_missing(
                "OPENAI_API_KEY not found in environment variables. Set it before starting the agents.",
            )
        })
    }

    /// Key/value view with secrets redacted
    #[must_use]
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("model", self.model.clone()),
            ("temperature", self.temperature.to_string()),
            ("max_tokens", self.max_tokens.to_string()),
            ("api_key", redact(self.api_key.as_deref())),
            ("tracing_enabled", self.tracing_enabled.to_string()),
            ("tracing_project", self.tracing_project.clone()),
            ("debug_mode", self.debug_mode.to_string()),
            ("log_level", self.log_level.to_string()),
        ]
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &redact(self.api_key.as_deref()))
            .field("tracing_enabled", &self.tracing_enabled)
            .field("tracing_endpoint", &self.tracing_endpoint)
            .field("tracing_api_key", &redact(self.tracing_api_key.as_deref()))
            .field("tracing_project", &self.tracing_project)
            .field("debug_mode", &self.debug_mode)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Load the nearest `.env` file, warning when none is found
///
/// Returns the path that was loaded.
#[must_use]
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(e) => {
            warn!("No .env file found or failed to load: {e}");
            None
        }
    }
}

/// Load a specific env file without overriding variables already set
///
/// # Errors
///
/// Returns `ConfigInvalid` if the file is missing or malformed
pub fn load_dotenv_from(path: &Path) -> AppResult<()> {
    dotenvy::from_path(path).map_err(|e| {
        AppError::config(format!("Failed to load env file {}: {e}", path.display()))
    })
}

fn redact(secret: Option<&str>) -> String {
    match secret {
        Some(_) => "[REDACTED]".to_owned(),
        None => "[not set]".to_owned(),
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |value| {
        matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
    })
}

fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key}: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AgentConfig {
            api_key: Some("sk-secret".to_owned()),
            ..AgentConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_temperature_out_of_range() {
        let config = AgentConfig {
            temperature: 1.5,
            ..AgentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("warning".parse::<AgentLogLevel>().unwrap(), AgentLogLevel::Warning);
        assert!("verbose".parse::<AgentLogLevel>().is_err());
    }
}
