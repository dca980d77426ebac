//! Rendering primitives for the layered canvas (Cairo-based).
//!
//! - [`Color`]: RGBA color representation with the canvas palette
//! - [`RenderStyle`]: resolved appearance settings
//! - [`ImageCache`]: decoded layer images and erase masks
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod images;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use images::{ImageCache, ImageError, luminance_mask};
pub use render::{
    LayerPaint, render_background, render_canvas, render_layer, render_polyline,
    render_selection,
};
pub use style::{BrushStyle, GridStyle, RenderStyle, SelectionStyle};
