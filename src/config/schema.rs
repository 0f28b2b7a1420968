//! Configuration schema types for `badge.toml`
//!
//! Defines the stored badge preference and its validation rules.

use serde::{Deserialize, Serialize};

use crate::density::parse_density;
use crate::size::Size;

/// Stored badge preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Size ordinal; values from newer releases fall back to large
    #[serde(default = "default_size")]
    pub size: Size,
    /// Density tag (ldpi, mdpi, hdpi, xhdpi, xxhdpi, xxxhdpi)
    #[serde(default = "default_density")]
    pub density: String,
    /// Use the dark theme frame
    #[serde(default)]
    pub dark: bool,
    /// Output width; defaults to the frame width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Output height; defaults to the frame height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            density: default_density(),
            dark: false,
            width: None,
            height: None,
        }
    }
}

fn default_size() -> Size {
    Size::Large
}

fn default_density() -> String {
    "mdpi".to_string()
}

/// Root of `badge.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgespriteConfig {
    #[serde(default)]
    pub badge: BadgeConfig,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl BadgespriteConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = parse_density(&self.badge.density) {
            errors.push(ConfigValidationError {
                field: "badge.density".to_string(),
                message: e.to_string(),
            });
        }

        if self.badge.width == Some(0) {
            errors.push(ConfigValidationError {
                field: "badge.width".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.badge.height == Some(0) {
            errors.push(ConfigValidationError {
                field: "badge.height".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }
}
