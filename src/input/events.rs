//! Generic pointer event types, independent of any windowing backend.

use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button
    #[default]
    Left,
    /// Middle button (always pans outside the cutout tools)
    Middle,
    /// Secondary button
    Right,
}

/// Pointer icon the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    /// Platform default arrow
    Default,
    /// Open hand, shown in Hand mode and while panning
    Grab,
    /// Precision crosshair for click cutouts
    Crosshair,
    /// System cursor hidden; the brush indicator is drawn instead
    Hidden,
}
