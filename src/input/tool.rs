//! Tool mode selection.

use serde::Deserialize;

/// Active canvas tool, chosen by the host application.
///
/// The engine never changes the mode itself; it only interprets pointer input
/// against whatever mode the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolMode {
    /// Select layers and drag them around (default)
    #[default]
    Select,
    /// Pan the canvas with any button
    Hand,
    /// Request a point cutout where the pointer is released
    CutoutClick,
    /// Paint a freehand region to cut out
    CutoutBrush,
}

impl ToolMode {
    /// Human-readable label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            ToolMode::Select => "Select",
            ToolMode::Hand => "Hand",
            ToolMode::CutoutClick => "Cutout (click)",
            ToolMode::CutoutBrush => "Cutout (brush)",
        }
    }
}
