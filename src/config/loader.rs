//! Configuration file loading with precedence handling.

use crate::table::options::{is_valid_page_size, DEFAULT_ROWS_PER_PAGE};
use crate::table::schema::is_sortable;
use crate::table::{SortDirection, SortSpec};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "CLASSVIEW_CONFIG";

/// Environment variable overriding the page size.
pub const ROWS_PER_PAGE_ENV_VAR: &str = "CLASSVIEW_ROWS_PER_PAGE";

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

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/classview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial page size. Must be one of 10, 50, 100, 200, 500, 1000.
    #[serde(default)]
    pub rows_per_page: Option<usize>,

    /// Column index (0-11) to sort by on startup.
    #[serde(default)]
    pub sort_column: Option<usize>,

    /// Direction of the startup sort, `"asc"` or `"desc"`.
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colours.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Page size, always one of the offered sizes.
    pub rows_per_page: usize,
    /// Startup sort. Never an unsortable column.
    pub sort: Option<SortSpec>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Disable colours.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            sort: None,
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/classview/classview.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("classview").join("classview.log")
    } else {
        PathBuf::from("classview.log")
    }
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

/// Resolve default config file path.
///
/// Returns `~/.config/classview/config.toml` on Linux, appropriate path on
/// other platforms, `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("classview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CLASSVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/classview/config.toml`
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

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// Values that are out of range (page sizes that are not offered, sort
/// columns that cannot be sorted) are logged and replaced by the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let rows_per_page = match config.rows_per_page {
        Some(size) if is_valid_page_size(size) => size,
        Some(size) => {
            warn!(size, "Ignoring rows_per_page from config: not an offered page size");
            defaults.rows_per_page
        }
        None => defaults.rows_per_page,
    };

    let sort = match config.sort_column {
        Some(column) if is_sortable(column) => Some(SortSpec {
            column,
            direction: config.sort_direction.unwrap_or_default(),
        }),
        Some(column) => {
            warn!(column, "Ignoring sort_column from config: column cannot be sorted");
            defaults.sort
        }
        None => defaults.sort,
    };

    ResolvedConfig {
        rows_per_page,
        sort,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CLASSVIEW_ROWS_PER_PAGE`: Override page size (ignored unless valid)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(ROWS_PER_PAGE_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(size) if is_valid_page_size(size) => config.rows_per_page = size,
            _ => warn!(value = %raw, "Ignoring {ROWS_PER_PAGE_ENV_VAR}: not an offered page size"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `rows_per_page_override` - Page size from `--rows-per-page` (already validated)
/// * `sort_column_override` - Column from `--sort` (already validated)
/// * `descending` - `--desc`; without `--sort` it flips the configured sort
/// * `no_color` - `--no-color`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    rows_per_page_override: Option<usize>,
    sort_column_override: Option<usize>,
    descending: bool,
    no_color: bool,
) -> ResolvedConfig {
    if let Some(size) = rows_per_page_override.filter(|&size| is_valid_page_size(size)) {
        config.rows_per_page = size;
    }

    let direction = if descending {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    if let Some(column) = sort_column_override.filter(|&column| is_sortable(column)) {
        config.sort = Some(SortSpec { column, direction });
    } else if descending {
        if let Some(sort) = config.sort.as_mut() {
            sort.direction = SortDirection::Desc;
        }
    }

    if no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
