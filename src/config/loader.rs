//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HISTORY_TIMELINE_CONFIG";
/// Environment variable overriding the column limit.
pub const COLUMN_LIMIT_ENV_VAR: &str = "HISTORY_TIMELINE_COLUMN_LIMIT";

const APP_DIR: &str = "history-timeline";
const DEFAULT_COLUMN_LIMIT: usize = 7;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Calendar used for day boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneSetting {
    /// The host's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/history-timeline/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Commits previewed by a collapsed folded group.
    #[serde(default)]
    pub column_limit: Option<usize>,

    /// Calendar for day separators.
    #[serde(default)]
    pub timezone: Option<TimezoneSetting>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Start with every folded group expanded.
    #[serde(default)]
    pub expand_all: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Commits previewed by a collapsed folded group.
    pub column_limit: usize,
    /// Calendar for day separators.
    pub timezone: TimezoneSetting,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Start with every folded group expanded.
    pub expand_all: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            column_limit: DEFAULT_COLUMN_LIMIT,
            timezone: TimezoneSetting::Local,
            log_file_path: default_log_path(),
            expand_all: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/history-timeline/history-timeline.log` on Linux,
/// or the platform's state directory elsewhere. Falls back to the current
/// directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join(APP_DIR).join("history-timeline.log"),
        None => PathBuf::from("history-timeline.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HISTORY_TIMELINE_CONFIG` environment variable
/// 3. Default path `~/.config/history-timeline/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        column_limit: config.column_limit.unwrap_or(defaults.column_limit),
        timezone: config.timezone.unwrap_or(defaults.timezone),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        expand_all: config.expand_all.unwrap_or(defaults.expand_all),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HISTORY_TIMELINE_COLUMN_LIMIT`: Override column limit (ignored unless a valid integer)
///
/// Runs before logging is installed, so rejected values come back as messages
/// for the caller to report.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<String>) {
    let mut rejected = Vec::new();

    if let Ok(raw) = std::env::var(COLUMN_LIMIT_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(limit) => config.column_limit = limit,
            Err(_) => rejected.push(format!(
                "Ignoring invalid {}={:?}: expected a non-negative integer",
                COLUMN_LIMIT_ENV_VAR, raw
            )),
        }
    }

    (config, rejected)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    column_limit_override: Option<usize>,
    timezone_override: Option<TimezoneSetting>,
    expand_all_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(limit) = column_limit_override {
        config.column_limit = limit;
    }

    if let Some(timezone) = timezone_override {
        config.timezone = timezone;
    }

    if let Some(expand_all) = expand_all_override {
        config.expand_all = expand_all;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
