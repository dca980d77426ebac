//! Configuration type definitions.

use super::enums::OverlayPosition;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera behavior and the background grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CameraConfig {
    /// Scale change per wheel delta unit while Ctrl/Meta is held
    /// (valid range: 0.0001 - 0.01)
    #[serde(default = "default_zoom_sensitivity")]
    pub zoom_sensitivity: f64,

    /// Spacing between grid dots in canvas units (valid range: 5.0 - 100.0)
    #[serde(default = "default_grid_period")]
    pub grid_period: f64,

    /// Grid dot radius in pixels; 0 hides the grid
    #[serde(default = "default_grid_dot_radius")]
    pub grid_dot_radius: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: default_zoom_sensitivity(),
            grid_period: default_grid_period(),
            grid_dot_radius: default_grid_dot_radius(),
        }
    }
}

/// Cutout brush settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Brush diameter in screen pixels (valid range: 1.0 - 500.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Wide translucent stroke showing the covered area [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_coverage_color")]
    pub coverage_color: [f64; 4],

    /// Thin centerline color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_line_color")]
    pub line_color: [f64; 4],

    /// Radius of the circular pointer indicator in pixels
    #[serde(default = "default_cursor_radius")]
    pub cursor_radius: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            coverage_color: default_coverage_color(),
            line_color: default_line_color(),
            cursor_radius: default_cursor_radius(),
        }
    }
}

/// Selected-layer decoration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Outline and handle border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_outline_color")]
    pub outline_color: [f64; 4],

    /// Glow color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_glow_color")]
    pub glow_color: [f64; 4],

    /// Outline width in canvas units
    #[serde(default = "default_outline_width")]
    pub outline_width: f64,

    /// Glow width in canvas units; 0 disables the glow
    #[serde(default = "default_glow_width")]
    pub glow_width: f64,

    /// Corner handle radius in canvas units
    #[serde(default = "default_handle_radius")]
    pub handle_radius: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            outline_color: default_outline_color(),
            glow_color: default_glow_color(),
            outline_width: default_outline_width(),
            glow_width: default_glow_width(),
            handle_radius: default_handle_radius(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Canvas background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],

    /// Grid dot color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_grid_color")]
    pub grid_color: [f64; 4],

    /// Show the zoom percentage overlay
    #[serde(default = "default_show_zoom_indicator")]
    pub show_zoom_indicator: bool,

    /// Zoom indicator position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_zoom_indicator_position")]
    pub zoom_indicator_position: OverlayPosition,

    /// Zoom indicator styling options
    #[serde(default)]
    pub zoom_indicator_style: ZoomIndicatorStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            grid_color: default_grid_color(),
            show_zoom_indicator: default_show_zoom_indicator(),
            zoom_indicator_position: default_zoom_indicator_position(),
            zoom_indicator_style: ZoomIndicatorStyle::default(),
        }
    }
}

/// Zoom indicator styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZoomIndicatorStyle {
    /// Font size for the indicator text
    #[serde(default = "default_indicator_font_size")]
    pub font_size: f64,

    /// Padding around the indicator text
    #[serde(default = "default_indicator_padding")]
    pub padding: f64,

    /// Distance from the viewport edges
    #[serde(default = "default_indicator_margin")]
    pub margin: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_indicator_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_indicator_text_color")]
    pub text_color: [f64; 4],
}

impl Default for ZoomIndicatorStyle {
    fn default() -> Self {
        Self {
            font_size: default_indicator_font_size(),
            padding: default_indicator_padding(),
            margin: default_indicator_margin(),
            bg_color: default_indicator_bg_color(),
            text_color: default_indicator_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_zoom_sensitivity() -> f64 {
    0.001
}

fn default_grid_period() -> f64 {
    20.0
}

fn default_grid_dot_radius() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    50.0
}

fn default_coverage_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 0.5]
}

fn default_line_color() -> [f64; 4] {
    [168.0 / 255.0, 85.0 / 255.0, 247.0 / 255.0, 1.0]
}

fn default_cursor_radius() -> f64 {
    24.0
}

fn default_outline_color() -> [f64; 4] {
    [109.0 / 255.0, 40.0 / 255.0, 217.0 / 255.0, 1.0]
}

fn default_glow_color() -> [f64; 4] {
    [109.0 / 255.0, 40.0 / 255.0, 217.0 / 255.0, 0.3]
}

fn default_outline_width() -> f64 {
    2.0
}

fn default_glow_width() -> f64 {
    4.0
}

fn default_handle_radius() -> f64 {
    4.0
}

fn default_background_color() -> [f64; 4] {
    [5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0, 1.0]
}

fn default_grid_color() -> [f64; 4] {
    [0.2, 0.2, 0.2, 1.0]
}

fn default_show_zoom_indicator() -> bool {
    true
}

fn default_zoom_indicator_position() -> OverlayPosition {
    OverlayPosition::BottomRight
}

fn default_indicator_font_size() -> f64 {
    12.0
}

fn default_indicator_padding() -> f64 {
    8.0
}

fn default_indicator_margin() -> f64 {
    16.0
}

fn default_indicator_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.5]
}

fn default_indicator_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 0.7]
}
