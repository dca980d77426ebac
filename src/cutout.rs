//! Cutout requests handed to the external fulfillment collaborator.
//!
//! The canvas only describes *what* to cut out. Segmentation, inpainting and
//! producing an updated erase mask are the host's responsibility.

use crate::host::CanvasHost;
use crate::util::LogicalPoint;
use log::debug;
use serde::Serialize;

/// A request to remove part of a layer's visible pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CutoutRequest {
    /// Point cutout at a logical canvas position
    Click { point: LogicalPoint },
    /// Freehand stroke; points are relative to the target layer's origin when a
    /// layer was selected, raw canvas coordinates otherwise
    Brush {
        points: Vec<LogicalPoint>,
        stroke_width: f64,
    },
}

/// Hands one finished request to the host. Nothing is retained or awaited.
pub fn dispatch<H: CanvasHost + ?Sized>(host: &mut H, request: CutoutRequest) {
    match &request {
        CutoutRequest::Click { point } => {
            debug!("Dispatching click cutout at ({:.1}, {:.1})", point.x, point.y);
        }
        CutoutRequest::Brush {
            points,
            stroke_width,
        } => {
            debug!(
                "Dispatching brush cutout: {} points, stroke width {:.2}",
                points.len(),
                stroke_width
            );
        }
    }
    host.cutout(request);
}
