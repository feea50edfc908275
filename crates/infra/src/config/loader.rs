//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `GOOGLE_API_KEY` is set, loads from environment variables only
//! 2. If the API key is not in the environment, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `GOOGLE_API_KEY`: Generative Language API key (required)
//! - `ROUTINE_GEMINI_BASE_URL`: API base URL
//! - `ROUTINE_PRIMARY_MODEL`: Primary model identifier
//! - `ROUTINE_FALLBACK_MODEL`: Fallback model identifier
//! - `ROUTINE_GEMINI_TIMEOUT_SECS`: Per-call timeout in seconds
//! - `ROUTINE_BIND_ADDRESS`: Web server bind address
//! - `ROUTINE_LOG_LEVEL`: Default log level when `RUST_LOG` is unset
//! - `ROUTINE_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! The optional variables also override values loaded from a file.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./.streamlit/secrets.toml`, `./secrets.toml`
//! 2. `./routine.toml`, `./routine.json`
//! 3. `./config.toml`, `./config.json`
//! 4. The same names relative to the executable location
//!
//! A file may carry the key as a top-level `GOOGLE_API_KEY` entry or as
//! `api_key` under a `[gemini]` table.

use std::path::{Path, PathBuf};

use routine_domain::constants::MSG_MISSING_API_KEY;
use routine_domain::{
    Config, GeminiConfig, LoggingConfig, Result, RoutineError, ServerConfig,
};
use serde::Deserialize;

const API_KEY_VAR: &str = "GOOGLE_API_KEY";

const CONFIG_FILE_NAMES: &[&str] = &[
    ".streamlit/secrets.toml",
    "secrets.toml",
    "routine.toml",
    "routine.json",
    "config.toml",
    "config.json",
];

/// On-disk shape; every field is optional so the key can live in either place.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "GOOGLE_API_KEY", default)]
    google_api_key: Option<String>,
    #[serde(default)]
    gemini: RawGeminiConfig,
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RawGeminiConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    primary_model: Option<String>,
    fallback_model: Option<String>,
    timeout_secs: Option<u64>,
}

impl RawConfig {
    fn resolve(self) -> Result<Config> {
        let api_key = self
            .gemini
            .api_key
            .or(self.google_api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RoutineError::Config(MSG_MISSING_API_KEY.to_string()))?;

        let mut gemini = GeminiConfig::new(api_key);
        if let Some(base_url) = self.gemini.base_url {
            gemini.base_url = base_url;
        }
        if let Some(primary_model) = self.gemini.primary_model {
            gemini.primary_model = primary_model;
        }
        if let Some(fallback_model) = self.gemini.fallback_model {
            gemini.fallback_model = fallback_model;
        }
        if let Some(timeout_secs) = self.gemini.timeout_secs {
            gemini.timeout_secs = timeout_secs;
        }

        Ok(Config { gemini, server: self.server, logging: self.logging })
    }
}

/// Load configuration with automatic fallback strategy
///
/// Loads from environment variables when `GOOGLE_API_KEY` is set. Only when
/// the key is absent from the environment does it fall back to a config file.
///
/// # Errors
/// Returns `RoutineError::Config` if:
/// - No API key is found in the environment or any config file
/// - An environment override is invalid
/// - File format is invalid
pub fn load() -> Result<Config> {
    if std::env::var_os(API_KEY_VAR).is_none() {
        tracing::debug!("{} not set, trying config file", API_KEY_VAR);
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `RoutineError::Config` if `GOOGLE_API_KEY` is missing or blank,
/// or an optional variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let api_key = env_var(API_KEY_VAR)?;
    if api_key.trim().is_empty() {
        return Err(RoutineError::Config(MSG_MISSING_API_KEY.to_string()));
    }

    let mut config = Config::with_api_key(api_key);
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RoutineError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The file carries no API key
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RoutineError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RoutineError::Config(format!(
                "{MSG_MISSING_API_KEY} (no config file found in any of the standard locations)"
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RoutineError::Config(format!("Failed to read config file: {}", e)))?;

    let mut config = parse_config(&contents, &config_path)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `RoutineError::Config` if format is invalid, parsing fails, or no
/// API key is present.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    let raw: RawConfig = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RoutineError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| RoutineError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(RoutineError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    raw.resolve()
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(base_url) = env_opt("ROUTINE_GEMINI_BASE_URL") {
        config.gemini.base_url = base_url;
    }
    if let Some(model) = env_opt("ROUTINE_PRIMARY_MODEL") {
        config.gemini.primary_model = model;
    }
    if let Some(model) = env_opt("ROUTINE_FALLBACK_MODEL") {
        config.gemini.fallback_model = model;
    }
    if let Some(timeout) = env_opt("ROUTINE_GEMINI_TIMEOUT_SECS") {
        config.gemini.timeout_secs = timeout.parse::<u64>().map_err(|e| {
            RoutineError::Config(format!(
                "Invalid ROUTINE_GEMINI_TIMEOUT_SECS value '{}': {}",
                timeout, e
            ))
        })?;
    }
    if let Some(bind_address) = env_opt("ROUTINE_BIND_ADDRESS") {
        config.server.bind_address = bind_address;
    }
    if let Some(level) = env_opt("ROUTINE_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("ROUTINE_LOG_JSON", config.logging.json);
    Ok(())
}

/// Get required environment variable
///
/// # Errors
/// Returns `RoutineError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RoutineError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional, non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use routine_domain::constants::{FALLBACK_MODEL, PRIMARY_MODEL};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const OVERRIDE_VARS: &[&str] = &[
        "ROUTINE_GEMINI_BASE_URL",
        "ROUTINE_PRIMARY_MODEL",
        "ROUTINE_FALLBACK_MODEL",
        "ROUTINE_GEMINI_TIMEOUT_SECS",
        "ROUTINE_BIND_ADDRESS",
        "ROUTINE_LOG_LEVEL",
        "ROUTINE_LOG_JSON",
    ];

    fn clear_env() {
        std::env::remove_var(API_KEY_VAR);
        for var in OVERRIDE_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("ROUTINE_TEST_BOOL_YES", "YES");
        std::env::set_var("ROUTINE_TEST_BOOL_OFF", "off");

        assert!(env_bool("ROUTINE_TEST_BOOL_YES", false));
        assert!(!env_bool("ROUTINE_TEST_BOOL_OFF", true));
        assert!(env_bool("ROUTINE_TEST_BOOL_MISSING", true));

        std::env::remove_var("ROUTINE_TEST_BOOL_YES");
        std::env::remove_var("ROUTINE_TEST_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_with_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "env-key");

        let config = load_from_env().expect("should load from env");

        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.gemini.primary_model, PRIMARY_MODEL);
        assert_eq!(config.gemini.fallback_model, FALLBACK_MODEL);

        clear_env();
    }

    #[test]
    fn test_load_from_env_applies_overrides() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "env-key");
        std::env::set_var("ROUTINE_PRIMARY_MODEL", "models/custom");
        std::env::set_var("ROUTINE_GEMINI_TIMEOUT_SECS", "15");
        std::env::set_var("ROUTINE_BIND_ADDRESS", "0.0.0.0:9000");
        std::env::set_var("ROUTINE_LOG_JSON", "true");

        let config = load_from_env().expect("should load from env");

        assert_eq!(config.gemini.primary_model, "models/custom");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert_eq!(config.server.bind_address, "0.0.0.0:9000");
        assert!(config.logging.json);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().expect_err("should fail without key");

        assert!(matches!(err, RoutineError::Config(_)));
    }

    #[test]
    fn test_load_from_env_blank_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "   ");

        let err = load_from_env().expect_err("should fail with blank key");

        assert!(matches!(err, RoutineError::Config(msg) if msg.contains("API 키")));
        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "env-key");
        std::env::set_var("ROUTINE_GEMINI_TIMEOUT_SECS", "soon");

        let err = load_from_env().expect_err("should fail");

        assert!(matches!(err, RoutineError::Config(msg) if msg.contains("ROUTINE_GEMINI_TIMEOUT_SECS")));
        clear_env();
    }

    #[test]
    fn test_load_reports_bad_override_when_key_is_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "real-key");
        std::env::set_var("ROUTINE_GEMINI_TIMEOUT_SECS", "abc");

        let err = load().expect_err("invalid override must not fall back to files");

        match err {
            RoutineError::Config(msg) => {
                assert!(msg.contains("ROUTINE_GEMINI_TIMEOUT_SECS"), "unexpected message: {msg}");
                assert!(!msg.contains(MSG_MISSING_API_KEY));
            }
            other => panic!("expected config error, got {other:?}"),
        }
        clear_env();
    }

    #[test]
    fn test_load_uses_env_when_key_is_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(API_KEY_VAR, "real-key");
        std::env::set_var("ROUTINE_FALLBACK_MODEL", "models/env-fallback");

        let config = load().expect("should load from env");

        assert_eq!(config.gemini.api_key, "real-key");
        assert_eq!(config.gemini.fallback_model, "models/env-fallback");
        clear_env();
    }

    #[test]
    fn test_parse_streamlit_style_secrets() {
        let contents = r#"
GOOGLE_API_KEY = "file-key"
OTHER_SECRET = "ignored"
"#;

        let config = parse_config(contents, Path::new("secrets.toml")).expect("should parse");

        assert_eq!(config.gemini.api_key, "file-key");
        assert_eq!(config.gemini.primary_model, PRIMARY_MODEL);
    }

    #[test]
    fn test_parse_sectioned_toml() {
        let contents = r#"
[gemini]
api_key = "section-key"
fallback_model = "models/other"
timeout_secs = 30

[server]
bind_address = "127.0.0.1:3000"

[logging]
level = "debug"
json = true
"#;

        let config = parse_config(contents, Path::new("routine.toml")).expect("should parse");

        assert_eq!(config.gemini.api_key, "section-key");
        assert_eq!(config.gemini.fallback_model, "models/other");
        assert_eq!(config.gemini.timeout_secs, 30);
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_section_key_wins_over_top_level_key() {
        let contents = r#"
GOOGLE_API_KEY = "top"

[gemini]
api_key = "section"
"#;

        let config = parse_config(contents, Path::new("secrets.toml")).expect("should parse");

        assert_eq!(config.gemini.api_key, "section");
    }

    #[test]
    fn test_parse_config_json() {
        let contents = r#"{ "gemini": { "api_key": "json-key" }, "server": { "bind_address": "[::1]:8080" } }"#;

        let config = parse_config(contents, Path::new("routine.json")).expect("should parse");

        assert_eq!(config.gemini.api_key, "json-key");
        assert_eq!(config.server.bind_address, "[::1]:8080");
    }

    #[test]
    fn test_parse_config_without_key() {
        let err = parse_config("[server]\nbind_address = \"x\"\n", Path::new("routine.toml"))
            .expect_err("should fail");

        assert!(matches!(err, RoutineError::Config(msg) if msg == MSG_MISSING_API_KEY));
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let err = parse_config("key: value", Path::new("routine.yaml")).expect_err("should fail");
        assert!(matches!(err, RoutineError::Config(msg) if msg.contains("yaml")));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/routine.toml")));
        assert!(matches!(result, Err(RoutineError::Config(_))));
    }
}
