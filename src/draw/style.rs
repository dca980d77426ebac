//! Resolved drawing styles, built from the configuration file.

use super::color::{self, Color};
use crate::camera::DEFAULT_GRID_PERIOD;
use crate::config::Config;

/// Background fill and dot grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub background: Color,
    pub dot_color: Color,
    /// Dot radius in screen pixels
    pub dot_radius: f64,
    /// Grid period in logical units
    pub period: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background: color::CANVAS_BACKGROUND,
            dot_color: color::GRID_DOT,
            dot_radius: 1.0,
            period: DEFAULT_GRID_PERIOD,
        }
    }
}

/// Decoration around the selected layer. Sizes are logical units, so the
/// decoration zooms with the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStyle {
    pub outline: Color,
    pub outline_width: f64,
    pub glow: Color,
    pub glow_width: f64,
    pub handle_radius: f64,
    pub handle_fill: Color,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            outline: color::ACCENT,
            outline_width: 2.0,
            glow: color::ACCENT_GLOW,
            glow_width: 4.0,
            handle_radius: 4.0,
            handle_fill: color::WHITE,
        }
    }
}

/// Live brush stroke and pointer indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStyle {
    /// Wide stroke showing the covered area
    pub coverage: Color,
    /// Thin centerline
    pub line: Color,
    /// Centerline width in screen pixels
    pub line_width: f64,
    /// Indicator radius in screen pixels
    pub cursor_radius: f64,
    pub cursor_fill: Color,
    pub cursor_border: Color,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            coverage: color::BRUSH_COVERAGE,
            line: color::BRUSH_LINE,
            line_width: 2.0,
            cursor_radius: 24.0,
            cursor_fill: color::BRUSH_LINE.with_alpha(0.2),
            cursor_border: color::WHITE.with_alpha(0.5),
        }
    }
}

/// Everything the render pipeline needs to know about appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderStyle {
    pub grid: GridStyle,
    pub selection: SelectionStyle,
    pub brush: BrushStyle,
    pub placeholder: Color,
}

impl From<&Config> for RenderStyle {
    fn from(config: &Config) -> Self {
        let defaults = BrushStyle::default();
        Self {
            grid: GridStyle {
                background: Color::from_array(config.ui.background_color),
                dot_color: Color::from_array(config.ui.grid_color),
                dot_radius: config.camera.grid_dot_radius,
                period: config.camera.grid_period,
            },
            selection: SelectionStyle {
                outline: Color::from_array(config.selection.outline_color),
                outline_width: config.selection.outline_width,
                glow: Color::from_array(config.selection.glow_color),
                glow_width: config.selection.glow_width,
                handle_radius: config.selection.handle_radius,
                handle_fill: color::WHITE,
            },
            brush: BrushStyle {
                coverage: Color::from_array(config.brush.coverage_color),
                line: Color::from_array(config.brush.line_color),
                cursor_radius: config.brush.cursor_radius,
                ..defaults
            },
            placeholder: color::PLACEHOLDER,
        }
    }
}
