/// UI rendering: zoom indicator overlay
use crate::camera::CameraTransform;
use crate::config::{OverlayPosition, ZoomIndicatorStyle};

/// Text shown by the zoom indicator, e.g. `"150 %"`.
pub fn zoom_label(camera: &CameraTransform) -> String {
    format!("{} %", camera.zoom_percent())
}

/// Render the zoom percentage in a corner of the viewport.
///
/// Drawn in viewport pixels, after the canvas itself.
///
/// # Returns
/// The box the indicator occupies as `(x, y, width, height)`, or `None` when the
/// text could not be measured.
pub fn render_zoom_indicator(
    ctx: &cairo::Context,
    camera: &CameraTransform,
    position: OverlayPosition,
    style: &ZoomIndicatorStyle,
    viewport_width: f64,
    viewport_height: f64,
) -> Option<(f64, f64, f64, f64)> {
    let label = zoom_label(camera);

    ctx.save().ok();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);

    let extents = match ctx.text_extents(&label) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!("Failed to measure zoom indicator text: {}, skipping", e);
            ctx.restore().ok();
            return None;
        }
    };

    let box_width = extents.width() + style.padding * 2.0;
    let box_height = style.font_size + style.padding * 2.0;
    let (x, y) = position.place(
        box_width,
        box_height,
        viewport_width,
        viewport_height,
        style.margin,
    );

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(x, y, box_width, box_height);
    let _ = ctx.fill();

    // Baseline centered vertically in the box
    let text_x = x + style.padding - extents.x_bearing();
    let text_y = y + box_height / 2.0 - (extents.y_bearing() + extents.height() / 2.0);
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(text_x, text_y);
    let _ = ctx.show_text(&label);

    ctx.restore().ok();
    Some((x, y, box_width, box_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rounds_percentage() {
        let camera = CameraTransform::with_view(1.234, 0.0, 0.0);
        assert_eq!(zoom_label(&camera), "123 %");
        assert_eq!(zoom_label(&CameraTransform::new()), "100 %");
    }

    #[test]
    fn indicator_sits_in_requested_corner() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 100).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        let style = ZoomIndicatorStyle::default();

        let (x, y, w, h) = render_zoom_indicator(
            &ctx,
            &CameraTransform::new(),
            OverlayPosition::BottomRight,
            &style,
            200.0,
            100.0,
        )
        .unwrap();

        assert!((x + w - (200.0 - style.margin)).abs() < 1e-9);
        assert!((y + h - (100.0 - style.margin)).abs() < 1e-9);
        assert!(w >= style.padding * 2.0);
    }
}
