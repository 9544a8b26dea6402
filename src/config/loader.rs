//! Configuration file loading with precedence handling.

use crate::state::pagination::{PageSize, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE};
use crate::state::search_controller::{ControllerSettings, DEFAULT_DEBOUNCE_DELAY};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "CATVIEW_CONFIG";
/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "CATVIEW_PAGE_SIZE";
/// Environment variable overriding the debounce delay in milliseconds.
pub const ENV_DEBOUNCE_MS: &str = "CATVIEW_DEBOUNCE_MS";

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

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value the browser cannot run with.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name (config key or env var).
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/catview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Items per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Quiet period after the last keystroke before the filter applies.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Width of the page-number window in the pagination bar.
    #[serde(default)]
    pub max_visible_pages: Option<usize>,

    /// Show page numbers (otherwise only Prev/Next).
    #[serde(default)]
    pub show_page_numbers: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (reserved).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Values are not validated here; see [`ResolvedConfig::controller_settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Items per page.
    pub page_size: usize,
    /// Debounce delay in milliseconds.
    pub debounce_ms: u64,
    /// Page-number window width.
    pub max_visible_pages: usize,
    /// Show page numbers.
    pub show_page_numbers: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_DELAY.as_millis() as u64,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_page_numbers: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate and convert into search controller settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero page size.
    pub fn controller_settings(&self) -> Result<ControllerSettings, ConfigError> {
        let page_size = PageSize::new(self.page_size).map_err(|e| ConfigError::InvalidValue {
            field: "page_size".to_string(),
            reason: e.to_string(),
        })?;

        Ok(ControllerSettings {
            page_size,
            debounce_delay: Duration::from_millis(self.debounce_ms),
            max_visible_pages: self.max_visible_pages,
            show_page_numbers: self.show_page_numbers,
        })
    }
}

/// Overrides taken from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`
    pub page_size: Option<usize>,
    /// `--debounce-ms`
    pub debounce_ms: Option<u64>,
    /// `--no-page-numbers` (as `Some(false)`)
    pub show_page_numbers: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/catview/catview.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("catview").join("catview.log"),
        None => PathBuf::from("catview.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/catview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catview").join("config.toml"))
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
/// 2. `CATVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/catview/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        max_visible_pages: config
            .max_visible_pages
            .unwrap_or(defaults.max_visible_pages),
        show_page_numbers: config
            .show_page_numbers
            .unwrap_or(defaults.show_page_numbers),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CATVIEW_PAGE_SIZE`: items per page
/// - `CATVIEW_DEBOUNCE_MS`: debounce delay
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a variable is set but is not a
/// non-negative integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(size) = read_env_number::<usize>(ENV_PAGE_SIZE)? {
        config.page_size = size;
    }

    if let Some(ms) = read_env_number::<u64>(ENV_DEBOUNCE_MS)? {
        config.debounce_ms = ms;
    }

    Ok(config)
}

fn read_env_number<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            field: name.to_string(),
            reason: format!("{raw:?}: {e}"),
        })
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: &CliOverrides) -> ResolvedConfig {
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }

    if let Some(ms) = cli.debounce_ms {
        config.debounce_ms = ms;
    }

    if let Some(show) = cli.show_page_numbers {
        config.show_page_numbers = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
