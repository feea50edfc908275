//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_TIMEOUT_SECS, FALLBACK_MODEL,
    PRIMARY_MODEL,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Text-generation service settings
    pub gemini: GeminiConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Build a configuration with default settings around the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            gemini: GeminiConfig::new(api_key),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Text-generation service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; never serialized or logged
    #[serde(skip_serializing)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model tried first
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    /// Model tried once after a primary failure
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Default settings around the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// The key never reaches logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("primary_model", &self.primary_model)
            .field("fallback_model", &self.fallback_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// `host:port` to listen on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: default_bind_address() }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_primary_model() -> String {
    PRIMARY_MODEL.to_string()
}

fn default_fallback_model() -> String {
    FALLBACK_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GEMINI_TIMEOUT_SECS
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
