//! Layer records owned by the host application.
//!
//! The canvas never creates or destroys layers. It reads the host's collection on
//! every event, resolves paint order and hit-testing from it, and asks the host to
//! move or act on layers through [`crate::host::CanvasHost`].

use crate::util::{LogicalPoint, Rect};
use serde::Serialize;
use std::fmt;

/// Unique layer identity, opaque to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image placed on the canvas.
///
/// Position and size are logical units. `z_index` orders painting (ascending);
/// layers sharing a z-index paint in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    /// Image reference resolved by the render pipeline's image cache
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    pub visible: bool,
    /// Luminance mask reference: white keeps pixels, black hides them
    pub erase_mask: Option<String>,
    pub name: String,
    pub kind: String,
}

impl Layer {
    /// Creates a visible, unmasked layer at z-index 0.
    pub fn new(
        id: impl Into<String>,
        src: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let id = LayerId::new(id);
        Self {
            name: id.to_string(),
            id,
            src: src.into(),
            x,
            y,
            width,
            height,
            z_index: 0,
            visible: true,
            erase_mask: None,
            kind: "image".to_string(),
        }
    }

    /// The layer's box, or `None` when its size is degenerate.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn origin(&self) -> LogicalPoint {
        LogicalPoint::new(self.x, self.y)
    }
}

/// Position update requested from the host while dragging a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerPosition {
    pub x: f64,
    pub y: f64,
}

/// Visible layers in paint order (ascending z-index, stable by list position).
pub fn paint_order(layers: &[Layer]) -> Vec<&Layer> {
    let mut ordered: Vec<&Layer> = layers.iter().filter(|layer| layer.visible).collect();
    ordered.sort_by_key(|layer| layer.z_index);
    ordered
}

/// Resolves the topmost visible layer under `point`, or `None` for the background.
pub fn hit_test(layers: &[Layer], point: LogicalPoint) -> Option<&Layer> {
    paint_order(layers)
        .into_iter()
        .rev()
        .find(|layer| layer.bounds().is_some_and(|bounds| bounds.contains(point)))
}

pub fn find<'a>(layers: &'a [Layer], id: &LayerId) -> Option<&'a Layer> {
    layers.iter().find(|layer| &layer.id == id)
}
