//! Shared configuration for Tinker Space Command tools.
//!
//! A small TOML file plus `TINKER_API_*` environment overrides, validated
//! and translated into the `tinker_api` client configuration. The base URL
//! is the only thing most installs ever change.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tinker_api::{ApiClientConfig, DEFAULT_BASE_URL, TransportConfig};

/// Environment prefix for `[api]` overrides, e.g. `TINKER_API_BASE_URL`.
pub const API_ENV_PREFIX: &str = "TINKER_API_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Telemetry API connection settings.
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout in seconds. Absent means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

impl Config {
    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_client_config()?;
        self.timeout()?;
        Ok(())
    }

    /// Client configuration for the `[api]` section.
    pub fn api_client_config(&self) -> Result<ApiClientConfig, ConfigError> {
        ApiClientConfig::new(&self.api.base_url).map_err(|e| ConfigError::Validation {
            field: "api.base_url".into(),
            reason: e.to_string(),
        })
    }

    /// Configured timeout, rejecting zero.
    pub fn timeout(&self) -> Result<Option<Duration>, ConfigError> {
        match self.api.timeout_secs {
            Some(0) => Err(ConfigError::Validation {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            }),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
            None => Ok(None),
        }
    }

    /// Transport settings for the `[api]` section.
    pub fn transport_config(&self) -> Result<TransportConfig, ConfigError> {
        let transport = TransportConfig::default();
        Ok(match self.timeout()? {
            Some(timeout) => transport.with_timeout(timeout),
            None => transport,
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "tinker", "tinker-space-command").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("tinker-space-command");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(API_ENV_PREFIX).map(|key| format!("api.{key}").into()))
}

/// Layer defaults, the file at `path` (if it exists) and environment
/// overrides, without validating the result.
///
/// Callers that apply further overrides validate once they are done.
pub fn extract_config_from(path: &Path) -> Result<Config, ConfigError> {
    Ok(figment_for(path).extract()?)
}

/// Load and validate the config at `path`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config = extract_config_from(path)?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
