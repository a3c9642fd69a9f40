//! Configuration management for the charging network dashboard.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the startup tab, dataset location and logging preferences.

use crate::app::Tab;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config directory.
const APP_DIR: &str = "evnet-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab shown on startup
    pub default_tab: Tab,
    /// Whether the map legend is shown on startup
    pub show_legend: bool,
    /// Dataset JSON file (relative to config dir or absolute); built-in data when unset
    pub dataset_path: Option<String>,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tab: Tab::Map,
            show_legend: true,
            dataset_path: None,
            log_path: "evnet-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Strip `//` line comments that are not inside a string.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev_slash = false;
            for (pos, ch) in line.char_indices() {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' if in_string => escaped = true,
                    '"' => in_string = !in_string,
                    '/' if !in_string && prev_slash => return line[..pos - 1].trim_end(),
                    _ => {}
                }
                prev_slash = ch == '/' && !in_string;
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/evnet-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get the application's config directory.
    pub fn config_home() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR))
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/evnet-tui/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_home()?.join("config.jsonc"))
    }

    /// Resolve a configured path against a base directory.
    fn resolve(base: &Path, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    /// Get dataset file path, if one is configured.
    ///
    /// # Arguments
    /// * `base` - Directory relative paths resolve against
    pub fn dataset_file_path(&self, base: &Path) -> Option<PathBuf> {
        self.dataset_path
            .as_deref()
            .map(|path| Self::resolve(base, path))
    }

    /// Get log file path.
    ///
    /// # Arguments
    /// * `base` - Directory relative paths resolve against
    pub fn log_file_path(&self, base: &Path) -> PathBuf {
        Self::resolve(base, &self.log_path)
    }
}
