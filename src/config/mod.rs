// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Zoom and gesture settings of the photo view
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `PHOTO_REVIEW_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_review::config;
//!
//! let (config, _warning) = config::load_with_override(None);
//! println!("max zoom: {}", config.viewer.max_zoom_scale());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Photo view settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Maximum zoom scale reachable by pinch or double tap.
    #[serde(default = "default_max_zoom_scale")]
    pub max_zoom_scale: Option<f32>,

    /// Maximum delay between two taps recognized as a double tap.
    #[serde(default = "default_double_tap_threshold_ms")]
    pub double_tap_threshold_ms: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_zoom_scale: default_max_zoom_scale(),
            double_tap_threshold_ms: default_double_tap_threshold_ms(),
        }
    }
}

impl ViewerConfig {
    /// Configured maximum zoom scale, clamped to the supported range.
    #[must_use]
    pub fn max_zoom_scale(&self) -> f32 {
        self.max_zoom_scale
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_MAX_ZOOM_SCALE)
            .clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT)
    }

    /// Configured double-tap threshold, clamped to the supported range.
    #[must_use]
    pub fn double_tap_threshold(&self) -> Duration {
        let millis = self
            .double_tap_threshold_ms
            .unwrap_or(DEFAULT_DOUBLE_TAP_THRESHOLD_MS)
            .clamp(MIN_DOUBLE_TAP_THRESHOLD_MS, MAX_DOUBLE_TAP_THRESHOLD_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn default_max_zoom_scale() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM_SCALE)
}

fn default_double_tap_threshold_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_THRESHOLD_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration, from `base_dir` when given.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
