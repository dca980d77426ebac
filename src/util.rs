//! Geometry helpers shared by the camera, hit-testing and the brush recorder.
//!
//! Two point types keep screen pixels and logical canvas units apart:
//! - [`ScreenPoint`]: viewport-relative pixels, before the camera is applied
//! - [`LogicalPoint`]: coordinates on the infinite, zoom-independent canvas plane

use serde::Serialize;

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(self, other: ScreenPoint) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// A point on the logical canvas plane.
///
/// Serialized as `{ "x": .., "y": .. }` inside cutout requests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in logical units.
    pub fn distance_to(self, other: LogicalPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point expressed relative to `origin`.
    pub fn relative_to(self, origin: LogicalPoint) -> LogicalPoint {
        LogicalPoint {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width and height must be positive and finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        let finite = x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Returns true if the point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges exclusive,
    /// so two touching rectangles never both claim the same point.
    pub fn contains(&self, point: LogicalPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn top_right(&self) -> LogicalPoint {
        LogicalPoint::new(self.x + self.width, self.y)
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [LogicalPoint; 4] {
        [
            LogicalPoint::new(self.x, self.y),
            LogicalPoint::new(self.x + self.width, self.y),
            LogicalPoint::new(self.x + self.width, self.y + self.height),
            LogicalPoint::new(self.x, self.y + self.height),
        ]
    }
}
