//! Configuration file loading with precedence handling.

use crate::state::{Presets, PresetsError, DEFAULT_LOW_TIP_THRESHOLD};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TIP_PROMPT_CONFIG";

/// Environment variable overriding the low-tip threshold.
pub const LOW_TIP_THRESHOLD_ENV: &str = "TIP_PROMPT_LOW_TIP_THRESHOLD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
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

    /// The `presets` list failed validation.
    #[error("Invalid presets: {0}")]
    InvalidPresets(#[from] PresetsError),

    /// The low-tip threshold is not a percentage.
    #[error("Invalid low tip threshold {0}: must be between 0 and 100")]
    InvalidThreshold(f64),

    /// The idle timeout is zero, which would quit before any input.
    #[error("Invalid idle timeout {0}s: must be at least 1 second")]
    InvalidTimeout(u64),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tip-prompt/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Preset percentages, left to right.
    #[serde(default)]
    pub presets: Option<Vec<u32>>,

    /// Custom tips strictly below this ask for confirmation.
    #[serde(default)]
    pub low_tip_threshold: Option<f64>,

    /// Give up (as if the user quit) after this many idle seconds.
    #[serde(default)]
    pub idle_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Preset percentages.
    pub presets: Presets,
    /// Low-tip confirmation threshold.
    pub low_tip_threshold: f64,
    /// Idle timeout; `None` blocks forever.
    pub idle_timeout: Option<Duration>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Disable colours.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            presets: Presets::default(),
            low_tip_threshold: DEFAULT_LOW_TIP_THRESHOLD,
            idle_timeout: None,
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tip-prompt/tip-prompt.log` on Linux, or the
/// platform cache directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("tip-prompt").join("tip-prompt.log"))
        .unwrap_or_else(|| PathBuf::from("tip-prompt.log"))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tip-prompt/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tip-prompt").join("config.toml"))
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
/// 2. `TIP_PROMPT_CONFIG` environment variable
/// 3. Default path `~/.config/tip-prompt/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns error if presets, threshold or idle timeout from the file fail
/// validation.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let presets = match config.presets {
        Some(values) => Presets::new(values)?,
        None => defaults.presets,
    };

    let low_tip_threshold = match config.low_tip_threshold {
        Some(value) => validate_threshold(value)?,
        None => defaults.low_tip_threshold,
    };

    let idle_timeout = match config.idle_timeout_secs {
        Some(secs) => Some(validate_timeout(secs)?),
        None => defaults.idle_timeout,
    };

    Ok(ResolvedConfig {
        presets,
        low_tip_threshold,
        idle_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: defaults.no_color,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TIP_PROMPT_LOW_TIP_THRESHOLD`: Override threshold. Invalid values are
///   logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(LOW_TIP_THRESHOLD_ENV) {
        let parsed = raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| validate_threshold(value).ok());
        match parsed {
            Some(threshold) => config.low_tip_threshold = threshold,
            None => warn!(
                var = LOW_TIP_THRESHOLD_ENV,
                value = %raw,
                "ignoring invalid environment override"
            ),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// override anything.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    timeout_override: Option<u64>,
    no_color: bool,
) -> ResolvedConfig {
    if let Some(secs) = timeout_override {
        config.idle_timeout = Some(Duration::from_secs(secs));
    }

    if no_color {
        config.no_color = true;
    }

    config
}

fn validate_threshold(value: f64) -> Result<f64, ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold(value))
    }
}

/// Same lower bound as `--timeout`.
fn validate_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(secs));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
