use crate::draw::{BrushStyle, render_polyline};
use crate::input::ToolMode;

use super::CanvasSession;

impl CanvasSession {
    /// Renders the stroke being recorded, if any.
    ///
    /// `ctx` must already carry the camera transform: points are logical and the
    /// widths are divided by the current scale so the stroke keeps a constant
    /// on-screen size.
    ///
    /// # Returns
    /// `true` if a stroke was rendered, `false` otherwise
    pub fn render_brush_preview(&self, ctx: &cairo::Context, style: &BrushStyle) -> bool {
        let Some(path) = self.brush_path() else {
            return false;
        };
        if path.is_empty() {
            return false;
        }

        let scale = self.camera.scale();
        render_polyline(
            ctx,
            path.points(),
            style.coverage,
            self.settings.brush_width / scale,
        );
        render_polyline(ctx, path.points(), style.line, style.line_width / scale);
        true
    }

    /// Renders the circular brush indicator under the pointer.
    ///
    /// Drawn in viewport pixels, so call it after the camera transform has been
    /// restored.
    pub fn render_brush_cursor(
        &self,
        ctx: &cairo::Context,
        mode: ToolMode,
        style: &BrushStyle,
    ) -> bool {
        let Some(center) = self.brush_cursor(mode) else {
            return false;
        };

        ctx.save().ok();
        ctx.new_path();
        ctx.arc(
            center.x,
            center.y,
            style.cursor_radius,
            0.0,
            std::f64::consts::TAU,
        );
        style.cursor_fill.set_source(ctx);
        let _ = ctx.fill_preserve();
        style.cursor_border.set_source(ctx);
        ctx.set_line_width(1.0);
        let _ = ctx.stroke();

        // Center dot
        ctx.arc(center.x, center.y, 2.0, 0.0, std::f64::consts::TAU);
        style.cursor_border.set_source(ctx);
        let _ = ctx.fill();
        ctx.restore().ok();
        true
    }
}
