//! Freehand path recording for the cutout brush.

use crate::cutout::CutoutRequest;
use crate::layer::Layer;
use crate::util::LogicalPoint;

/// Minimum logical distance between consecutive recorded points.
pub const MIN_POINT_DISTANCE: f64 = 5.0;
/// Brush diameter in screen pixels at 100% zoom.
pub const DEFAULT_STROKE_WIDTH: f64 = 50.0;
/// Paths with fewer points are treated as accidental taps.
pub const MIN_STROKE_POINTS: usize = 3;

/// Simplified polyline in logical coordinates, alive for one brush gesture.
///
/// Consecutive points are always at least [`MIN_POINT_DISTANCE`] apart, so path
/// density is bounded regardless of pointer sampling rate or zoom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrushPath {
    points: Vec<LogicalPoint>,
}

impl BrushPath {
    /// Starts a path at the press position.
    pub fn start(point: LogicalPoint) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Appends `point` if it is far enough from the last recorded point.
    ///
    /// Returns `true` when the point was kept.
    pub fn push(&mut self, point: LogicalPoint) -> bool {
        if let Some(last) = self.points.last() {
            if last.distance_to(point) < MIN_POINT_DISTANCE {
                return false;
            }
        }
        self.points.push(point);
        true
    }

    pub fn points(&self) -> &[LogicalPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Converts the finished path into a brush cutout request.
    ///
    /// With a `target` layer the points become layer-local and the stroke width is
    /// divided by `scale`, keeping the on-screen brush diameter constant. Without one,
    /// raw canvas points and the unscaled width are used. Paths shorter than
    /// [`MIN_STROKE_POINTS`] yield `None`.
    pub fn finalize(
        self,
        target: Option<&Layer>,
        scale: f64,
        base_width: f64,
    ) -> Option<CutoutRequest> {
        if self.points.len() < MIN_STROKE_POINTS {
            return None;
        }

        let request = match target {
            Some(layer) => {
                let origin = layer.origin();
                CutoutRequest::Brush {
                    points: self
                        .points
                        .into_iter()
                        .map(|p| p.relative_to(origin))
                        .collect(),
                    stroke_width: base_width / scale,
                }
            }
            None => CutoutRequest::Brush {
                points: self.points,
                stroke_width: base_width,
            },
        };
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> LogicalPoint {
        LogicalPoint::new(x, y)
    }

    #[test]
    fn push_drops_points_closer_than_threshold() {
        let mut path = BrushPath::start(p(0.0, 0.0));
        assert!(!path.push(p(3.0, 3.0)));
        assert!(path.push(p(5.0, 0.0)));
        assert!(!path.push(p(5.0, 4.9)));
        assert!(path.push(p(5.0, 10.0)));
        assert_eq!(path.points(), &[p(0.0, 0.0), p(5.0, 0.0), p(5.0, 10.0)]);
    }

    #[test]
    fn recorded_points_are_spaced_by_threshold() {
        let mut path = BrushPath::start(p(0.0, 0.0));
        for i in 1..200 {
            let t = i as f64 * 0.7;
            path.push(p(t, (t * 0.3).sin() * 20.0));
        }
        for pair in path.points().windows(2) {
            assert!(pair[0].distance_to(pair[1]) >= MIN_POINT_DISTANCE);
        }
    }

    #[test]
    fn short_paths_are_discarded() {
        let mut path = BrushPath::start(p(0.0, 0.0));
        path.push(p(10.0, 0.0));
        assert_eq!(path.len(), 2);
        assert!(path.finalize(None, 1.0, DEFAULT_STROKE_WIDTH).is_none());
        assert!(BrushPath::default().finalize(None, 1.0, DEFAULT_STROKE_WIDTH).is_none());
    }

    #[test]
    fn finalize_makes_points_layer_relative_and_scales_width() {
        let layer = Layer::new("photo", "photo.png", 100.0, 100.0, 200.0, 200.0);
        let mut path = BrushPath::start(p(150.0, 150.0));
        path.push(p(160.0, 160.0));
        path.push(p(170.0, 170.0));

        let request = path.finalize(Some(&layer), 2.0, DEFAULT_STROKE_WIDTH).unwrap();
        assert_eq!(
            request,
            CutoutRequest::Brush {
                points: vec![p(50.0, 50.0), p(60.0, 60.0), p(70.0, 70.0)],
                stroke_width: 25.0,
            }
        );
    }

    #[test]
    fn finalize_without_layer_keeps_raw_points_and_width() {
        let mut path = BrushPath::start(p(150.0, 150.0));
        path.push(p(160.0, 160.0));
        path.push(p(170.0, 170.0));

        let request = path.finalize(None, 4.0, DEFAULT_STROKE_WIDTH).unwrap();
        assert_eq!(
            request,
            CutoutRequest::Brush {
                points: vec![p(150.0, 150.0), p(160.0, 160.0), p(170.0, 170.0)],
                stroke_width: 50.0,
            }
        );
    }
}
