//! Configuration loading and discovery for `badge.toml`
//!
//! Provides functions to find, load, and override configuration.

use super::schema::{BadgeConfig, BadgespriteConfig};
use crate::size::Size;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE: &str = "badge.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse badge.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub size: Option<Size>,
    pub density: Option<String>,
    pub dark: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Find badge.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for badge.toml
/// 2. Check XDG_CONFIG_HOME/badgesprite/badge.toml (or ~/.config/badgesprite/badge.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find badge.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("badgesprite").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find badge.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a badge.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<BadgespriteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            tracing::debug!("no badge.toml found, using defaults");
            Ok(BadgespriteConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<BadgespriteConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let config: BadgespriteConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Apply CLI overrides on top of a loaded badge preference.
pub fn merge_cli_overrides(config: &mut BadgeConfig, overrides: &CliOverrides) {
    if let Some(size) = overrides.size {
        config.size = size;
    }
    if let Some(density) = &overrides.density {
        config.density = density.clone();
    }
    if let Some(dark) = overrides.dark {
        config.dark = dark;
    }
    if let Some(width) = overrides.width {
        config.width = Some(width);
    }
    if let Some(height) = overrides.height {
        config.height = Some(height);
    }
}
