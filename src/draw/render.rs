//! Cairo-based rendering of the layered canvas.

use super::color::Color;
use super::images::ImageCache;
use super::style::{GridStyle, RenderStyle, SelectionStyle};
use crate::camera::CameraTransform;
use crate::host::CanvasView;
use crate::input::{CanvasSession, ToolMode};
use crate::layer::{self, Layer};
use crate::util::{LogicalPoint, Rect};
use log::warn;

/// How a single layer is composited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerPaint<'a> {
    /// Image stretched over the layer box
    Plain { layer: &'a Layer },
    /// Image modulated by the luminance of an erase mask over the same box
    Masked { layer: &'a Layer, mask: &'a str },
}

impl<'a> LayerPaint<'a> {
    pub fn of(layer: &'a Layer) -> Self {
        match layer.erase_mask.as_deref() {
            Some(mask) => LayerPaint::Masked { layer, mask },
            None => LayerPaint::Plain { layer },
        }
    }

    pub fn layer(&self) -> &'a Layer {
        match self {
            LayerPaint::Plain { layer } | LayerPaint::Masked { layer, .. } => layer,
        }
    }
}

/// Renders one complete canvas frame.
///
/// Order: background and grid, camera transform, layers in paint order, selection
/// decoration, live brush stroke, then the brush indicator in viewport pixels.
///
/// # Arguments
/// * `ctx` - Cairo context whose origin is the viewport's top-left
/// * `session` - Camera and gesture state
/// * `view` - Layers, selection and tool mode supplied by the host
/// * `images` - Decoded layer images and masks
/// * `width` - Viewport width in pixels
/// * `height` - Viewport height in pixels
pub fn render_canvas(
    ctx: &cairo::Context,
    session: &CanvasSession,
    view: &CanvasView<'_>,
    images: &mut ImageCache,
    style: &RenderStyle,
    width: f64,
    height: f64,
) {
    let camera = session.camera();
    render_background(ctx, camera, &style.grid, width, height);

    ctx.save().ok();
    let (offset_x, offset_y) = camera.offset();
    ctx.translate(offset_x, offset_y);
    ctx.scale(camera.scale(), camera.scale());

    images.retain_masks(view.layers.iter().filter_map(|layer| layer.erase_mask.as_deref()));
    for layer in layer::paint_order(view.layers) {
        render_layer(ctx, LayerPaint::of(layer), images, style.placeholder);
    }

    if view.mode == ToolMode::Select {
        if let Some(bounds) = view
            .selected_layer()
            .filter(|layer| layer.visible)
            .and_then(Layer::bounds)
        {
            render_selection(ctx, bounds, &style.selection);
        }
    }

    session.render_brush_preview(ctx, &style.brush);
    ctx.restore().ok();

    session.render_brush_cursor(ctx, view.mode, &style.brush);
}

/// Fills the viewport and draws the dot grid that follows the camera.
pub fn render_background(
    ctx: &cairo::Context,
    camera: &CameraTransform,
    style: &GridStyle,
    width: f64,
    height: f64,
) {
    style.background.set_source(ctx);
    let _ = ctx.paint();

    if style.dot_radius <= 0.0 {
        return;
    }
    style.dot_color.set_source(ctx);
    for dot in camera.background_grid(style.period).dots(width, height) {
        ctx.new_sub_path();
        ctx.arc(dot.x, dot.y, style.dot_radius, 0.0, std::f64::consts::TAU);
    }
    let _ = ctx.fill();
}

/// Draws a layer into its box. `ctx` must carry the camera transform.
///
/// A layer whose image is unavailable is drawn as a flat placeholder box. A mask
/// that cannot be loaded is ignored and the layer drawn unmasked.
pub fn render_layer(
    ctx: &cairo::Context,
    paint: LayerPaint<'_>,
    images: &mut ImageCache,
    placeholder: Color,
) {
    let layer = paint.layer();
    let Some(bounds) = layer.bounds() else {
        return;
    };

    ctx.save().ok();
    ctx.translate(bounds.x, bounds.y);
    ctx.rectangle(0.0, 0.0, bounds.width, bounds.height);
    ctx.clip();

    match images.image(&layer.src).cloned() {
        Some(image) if image.width() > 0 && image.height() > 0 => {
            let pattern = stretched(&image, bounds.width, bounds.height);
            if let Err(err) = ctx.set_source(&pattern) {
                warn!("Failed to use image of layer {}: {err}", layer.id);
            } else {
                let mask = match paint {
                    LayerPaint::Masked { mask, .. } => images.mask(mask).cloned(),
                    LayerPaint::Plain { .. } => None,
                };
                match mask {
                    Some(mask) if mask.width() > 0 && mask.height() > 0 => {
                        let _ = ctx.mask(&stretched(&mask, bounds.width, bounds.height));
                    }
                    _ => {
                        let _ = ctx.paint();
                    }
                }
            }
        }
        _ => {
            placeholder.set_source(ctx);
            let _ = ctx.paint();
        }
    }

    ctx.restore().ok();
}

/// Pattern that maps the whole surface onto a `width` x `height` box at the origin.
fn stretched(surface: &cairo::ImageSurface, width: f64, height: f64) -> cairo::SurfacePattern {
    let pattern = cairo::SurfacePattern::create(surface);
    pattern.set_matrix(cairo::Matrix::new(
        surface.width() as f64 / width,
        0.0,
        0.0,
        surface.height() as f64 / height,
        0.0,
        0.0,
    ));
    pattern.set_filter(cairo::Filter::Good);
    pattern.set_extend(cairo::Extend::Pad);
    pattern
}

/// Renders the selection glow, outline and corner handles around `bounds`.
pub fn render_selection(ctx: &cairo::Context, bounds: Rect, style: &SelectionStyle) {
    ctx.save().ok();
    ctx.set_line_join(cairo::LineJoin::Miter);

    // Glow sits entirely outside the box
    if style.glow_width > 0.0 {
        let half = style.glow_width / 2.0;
        style.glow.set_source(ctx);
        ctx.set_line_width(style.glow_width);
        ctx.rectangle(
            bounds.x - half,
            bounds.y - half,
            bounds.width + style.glow_width,
            bounds.height + style.glow_width,
        );
        let _ = ctx.stroke();
    }

    style.outline.set_source(ctx);
    ctx.set_line_width(style.outline_width);
    ctx.rectangle(bounds.x, bounds.y, bounds.width, bounds.height);
    let _ = ctx.stroke();

    ctx.set_line_width(1.0);
    for corner in bounds.corners() {
        ctx.new_path();
        ctx.arc(
            corner.x,
            corner.y,
            style.handle_radius,
            0.0,
            std::f64::consts::TAU,
        );
        style.handle_fill.set_source(ctx);
        let _ = ctx.fill_preserve();
        style.outline.set_source(ctx);
        let _ = ctx.stroke();
    }

    ctx.restore().ok();
}

/// Renders an open polyline with round caps and joins.
///
/// A single point renders as a dot.
pub fn render_polyline(ctx: &cairo::Context, points: &[LogicalPoint], color: Color, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    color.set_source(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}
