// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[appearance]` - Label, colours, corner radius and text size of the controls
//! - `[swipe]` - Distance ratio, hint width and reset delay
//! - `[demo]` - Duration of the simulated host operation
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_SWIPE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_swipe::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.swipe.distance_ratio = Some(0.6);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::swipe::{ResetDelay, SwipeDistanceRatio};
use crate::error::{Error, Result};
use crate::ui::swipe_button::Appearance;
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Look of the swipe controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Label shown inside the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Label colour as `#rrggbb` or `#rrggbbaa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    /// Background colour as `#rrggbb` or `#rrggbbaa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Chevron tint; include alpha for translucency (e.g. `#ffffff33`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_color: Option<String>,

    /// Corner radius of the rest shape, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    /// Label size, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            text: Some(DEFAULT_BUTTON_TEXT.to_string()),
            text_color: Some(DEFAULT_TEXT_COLOR.to_string()),
            background_color: Some(DEFAULT_BACKGROUND_COLOR.to_string()),
            arrow_color: Some(DEFAULT_ARROW_COLOR.to_string()),
            corner_radius: Some(DEFAULT_CORNER_RADIUS),
            text_size: Some(DEFAULT_TEXT_SIZE),
        }
    }
}

impl AppearanceConfig {
    /// Builds the control appearance, falling back to defaults for missing
    /// or unparsable values.
    #[must_use]
    pub fn to_appearance(&self) -> Appearance {
        let defaults = Appearance::default();
        Appearance {
            text: self.text.clone().unwrap_or(defaults.text),
            text_color: parse_color(self.text_color.as_deref()).unwrap_or(defaults.text_color),
            background_color: parse_color(self.background_color.as_deref())
                .unwrap_or(defaults.background_color),
            arrow_color: parse_color(self.arrow_color.as_deref()).unwrap_or(defaults.arrow_color),
            corner_radius: self
                .corner_radius
                .filter(|r| r.is_finite() && *r >= 0.0)
                .unwrap_or(defaults.corner_radius),
            text_size: self
                .text_size
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(defaults.text_size),
        }
    }
}

/// Gesture and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Share of the width the hint must cover to confirm (clamped to 0.0–1.0).
    #[serde(
        default = "default_distance_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_ratio: Option<f32>,

    /// Width of the draggable hint in pixels.
    #[serde(default = "default_hint_width", skip_serializing_if = "Option::is_none")]
    pub hint_width: Option<f32>,

    /// Pause between a failure glyph and the morph back (milliseconds).
    #[serde(
        default = "default_reset_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_delay_ms: Option<u64>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_ratio: default_distance_ratio(),
            hint_width: default_hint_width(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl SwipeConfig {
    #[must_use]
    pub fn ratio(&self) -> SwipeDistanceRatio {
        self.distance_ratio
            .map(SwipeDistanceRatio::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn reset_delay(&self) -> ResetDelay {
        self.reset_delay_ms
            .map(ResetDelay::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn hint_width(&self) -> f32 {
        self.hint_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_HINT_WIDTH)
    }
}

/// Demo application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// How long the simulated host operation takes (milliseconds).
    #[serde(
        default = "default_simulated_work_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_work_ms: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            simulated_work_ms: default_simulated_work_ms(),
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn simulated_work(&self) -> Duration {
        Duration::from_millis(
            self.simulated_work_ms
                .unwrap_or(DEFAULT_SIMULATED_WORK_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub swipe: SwipeConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_distance_ratio() -> Option<f32> {
    Some(DEFAULT_SWIPE_DISTANCE_RATIO)
}

fn default_hint_width() -> Option<f32> {
    Some(DEFAULT_HINT_WIDTH)
}

fn default_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESET_DELAY_MS)
}

fn default_simulated_work_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_WORK_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Parses `#rrggbb` / `#rrggbbaa` colours.
#[must_use]
pub fn parse_color(raw: Option<&str>) -> Option<Color> {
    raw.and_then(|hex| hex.trim().parse::<Color>().ok())
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

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), err)),
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            appearance: AppearanceConfig {
                text: Some("Pay now".to_string()),
                ..AppearanceConfig::default()
            },
            swipe: SwipeConfig {
                distance_ratio: Some(0.5),
                hint_width: Some(40.0),
                reset_delay_ms: Some(900),
            },
            demo: DemoConfig {
                simulated_work_ms: Some(500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[swipe\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[swipe]\ndistance_ratio = 0.4\n").expect("parse");
        assert_eq!(config.swipe.distance_ratio, Some(0.4));
        assert_eq!(config.swipe.hint_width, Some(DEFAULT_HINT_WIDTH));
        assert_eq!(config.appearance, AppearanceConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn out_of_range_ratio_is_clamped_on_use() {
        let swipe = SwipeConfig {
            distance_ratio: Some(1.5),
            ..SwipeConfig::default()
        };
        assert_eq!(swipe.ratio().value(), 1.0);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn unparsable_colors_fall_back_to_defaults() {
        let appearance = AppearanceConfig {
            text_color: Some("not-a-color".to_string()),
            corner_radius: Some(-4.0),
            ..AppearanceConfig::default()
        }
        .to_appearance();
        let defaults = Appearance::default();
        assert_eq!(appearance.text_color, defaults.text_color);
        assert_eq!(appearance.corner_radius, defaults.corner_radius);
    }

    #[test]
    fn hex_colors_are_parsed() {
        let color = parse_color(Some("#ff0000")).expect("valid colour");
        assert_eq!(color, Color::from_rgb8(255, 0, 0));
    }
}
