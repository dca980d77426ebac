//! Pan/zoom camera mapping viewport pixels to logical canvas units.
//!
//! The camera translates by `offset` (screen pixels) and then scales. Zoom is applied
//! about the canvas origin rather than the pointer; panning compensates visually.

use crate::util::{LogicalPoint, ScreenPoint};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 5.0;
/// Scale change per wheel delta unit.
pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.001;
/// Background grid period in logical units.
pub const DEFAULT_GRID_PERIOD: f64 = 20.0;

/// Camera state: uniform scale plus a screen-space offset.
///
/// `scale` always stays within [`MIN_SCALE`, `MAX_SCALE`]; the offset is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraTransform {
    /// Identity camera: scale 1, no offset.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Creates a camera with the given view; `scale` is clamped into range.
    pub fn with_view(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        let mut camera = Self {
            scale: 1.0,
            offset_x,
            offset_y,
        };
        camera.set_scale(scale);
        camera
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Sets the scale, clamped to the allowed range. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Applies a wheel zoom step: `scale - delta_y * sensitivity`, clamped.
    ///
    /// Negative `delta_y` (wheel up) zooms in.
    pub fn zoom(&mut self, delta_y: f64, sensitivity: f64) {
        self.set_scale(self.scale - delta_y * sensitivity);
    }

    /// Shifts the offset by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.offset_x += dx;
            self.offset_y += dy;
        }
    }

    /// Converts a viewport-relative point to logical canvas units.
    pub fn to_logical(&self, point: ScreenPoint) -> LogicalPoint {
        LogicalPoint::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        )
    }

    /// Converts a logical point back to viewport pixels.
    pub fn to_screen(&self, point: LogicalPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }

    /// Zoom level shown to the user, in percent.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }

    /// Background grid for this camera; `period` is in logical units.
    pub fn background_grid(&self, period: f64) -> BackgroundGrid {
        BackgroundGrid {
            cell_size: period * self.scale,
            origin_x: self.offset_x,
            origin_y: self.offset_y,
        }
    }
}

/// Repeating dot grid in screen space that appears fixed to the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundGrid {
    /// Distance between dots in screen pixels
    pub cell_size: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl BackgroundGrid {
    /// Position of the first dot at or after the viewport's top-left corner.
    pub fn phase(&self) -> (f64, f64) {
        (
            self.origin_x.rem_euclid(self.cell_size),
            self.origin_y.rem_euclid(self.cell_size),
        )
    }

    /// Every dot center that falls inside a `width` x `height` viewport.
    pub fn dots(&self, width: f64, height: f64) -> Vec<ScreenPoint> {
        // Below one pixel the grid is visual noise and the dot count explodes.
        if !self.cell_size.is_finite() || self.cell_size < 1.0 {
            return Vec::new();
        }

        let (phase_x, phase_y) = self.phase();
        let mut dots = Vec::new();
        let mut y = phase_y;
        while y < height {
            let mut x = phase_x;
            while x < width {
                dots.push(ScreenPoint::new(x, y));
                x += self.cell_size;
            }
            y += self.cell_size;
        }
        dots
    }
}
