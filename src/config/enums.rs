//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Screen corner for on-canvas overlays.
///
/// Controls where the zoom indicator appears relative to the viewport edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl OverlayPosition {
    /// Top-left of a `width` x `height` box placed in this corner of the viewport.
    pub fn place(
        self,
        width: f64,
        height: f64,
        viewport_width: f64,
        viewport_height: f64,
        margin: f64,
    ) -> (f64, f64) {
        let right = viewport_width - width - margin;
        let bottom = viewport_height - height - margin;
        match self {
            OverlayPosition::TopLeft => (margin, margin),
            OverlayPosition::TopRight => (right, margin),
            OverlayPosition::BottomLeft => (margin, bottom),
            OverlayPosition::BottomRight => (right, bottom),
        }
    }
}
