//! Configuration file support for cutout-canvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/cutout-canvas/config.toml`. Settings include camera tuning,
//! brush size and colors, selection decoration, and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::OverlayPosition;
pub use types::{BrushConfig, CameraConfig, SelectionConfig, UiConfig, ZoomIndicatorStyle};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [camera]
/// zoom_sensitivity = 0.001
/// grid_period = 20.0
///
/// [brush]
/// stroke_width = 50.0
///
/// [ui]
/// show_zoom_indicator = true
/// zoom_indicator_position = "bottom-right"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Zoom sensitivity and background grid
    #[serde(default)]
    pub camera: CameraConfig,

    /// Cutout brush size and appearance
    #[serde(default)]
    pub brush: BrushConfig,

    /// Selected-layer decoration
    #[serde(default)]
    pub selection: SelectionConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `camera.zoom_sensitivity`: 0.0001 - 0.01
    /// - `camera.grid_period`: 5.0 - 100.0
    /// - `camera.grid_dot_radius`: 0.0 - 5.0
    /// - `brush.stroke_width`: 1.0 - 500.0
    /// - `brush.cursor_radius`: 1.0 - 250.0
    /// - color components: 0.0 - 1.0
    pub fn validate_and_clamp(&mut self) {
        // Zoom sensitivity: 0.0001 - 0.01
        if !(0.0001..=0.01).contains(&self.camera.zoom_sensitivity) {
            warn!(
                "Invalid zoom_sensitivity {}, clamping to 0.0001-0.01 range",
                self.camera.zoom_sensitivity
            );
            self.camera.zoom_sensitivity = clamp_or(self.camera.zoom_sensitivity, 0.0001, 0.01);
        }

        // Grid period: 5.0 - 100.0
        if !(5.0..=100.0).contains(&self.camera.grid_period) {
            warn!(
                "Invalid grid_period {:.1}, clamping to 5.0-100.0 range",
                self.camera.grid_period
            );
            self.camera.grid_period = clamp_or(self.camera.grid_period, 5.0, 100.0);
        }

        // Grid dot radius: 0.0 - 5.0
        if !(0.0..=5.0).contains(&self.camera.grid_dot_radius) {
            warn!(
                "Invalid grid_dot_radius {:.1}, clamping to 0.0-5.0 range",
                self.camera.grid_dot_radius
            );
            self.camera.grid_dot_radius = clamp_or(self.camera.grid_dot_radius, 0.0, 5.0);
        }

        // Stroke width: 1.0 - 500.0
        if !(1.0..=500.0).contains(&self.brush.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-500.0 range",
                self.brush.stroke_width
            );
            self.brush.stroke_width = clamp_or(self.brush.stroke_width, 1.0, 500.0);
        }

        // Cursor radius: 1.0 - 250.0
        if !(1.0..=250.0).contains(&self.brush.cursor_radius) {
            warn!(
                "Invalid cursor_radius {:.1}, clamping to 1.0-250.0 range",
                self.brush.cursor_radius
            );
            self.brush.cursor_radius = clamp_or(self.brush.cursor_radius, 1.0, 250.0);
        }

        for (name, value) in [
            ("selection.outline_width", &mut self.selection.outline_width),
            ("selection.glow_width", &mut self.selection.glow_width),
            ("selection.handle_radius", &mut self.selection.handle_radius),
        ] {
            if !(0.0..=50.0).contains(&*value) {
                warn!("Invalid {name} {:.1}, clamping to 0.0-50.0 range", *value);
                *value = clamp_or(*value, 0.0, 50.0);
            }
        }

        // Validate color components (0.0-1.0)
        for (name, color) in [
            ("brush.coverage_color", &mut self.brush.coverage_color),
            ("brush.line_color", &mut self.brush.line_color),
            ("selection.outline_color", &mut self.selection.outline_color),
            ("selection.glow_color", &mut self.selection.glow_color),
            ("ui.background_color", &mut self.ui.background_color),
            ("ui.grid_color", &mut self.ui.grid_color),
            (
                "ui.zoom_indicator_style.bg_color",
                &mut self.ui.zoom_indicator_style.bg_color,
            ),
            (
                "ui.zoom_indicator_style.text_color",
                &mut self.ui.zoom_indicator_style.text_color,
            ),
        ] {
            for (i, component) in color.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(&*component) {
                    warn!(
                        "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                        name, i, component
                    );
                    *component = clamp_or(*component, 0.0, 1.0);
                }
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/cutout-canvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("cutout-canvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration to `path` as TOML, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Clamps `value`, falling back to `min` for NaN.
fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
