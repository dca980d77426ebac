//! RGBA color type and the canvas palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use cutout_canvas::draw::Color;
/// let accent = Color::from_rgb8(109, 40, 217);
/// let translucent = accent.with_alpha(0.3);
/// assert_eq!(translucent.a, 0.3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Color from a config array `[r, g, b, a]`, each component clamped to 0.0-1.0.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| c.clamp(0.0, 1.0));
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Makes this color the context's source.
    pub fn set_source(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Selection outline (#6d28d9)
pub const ACCENT: Color = Color::new(109.0 / 255.0, 40.0 / 255.0, 217.0 / 255.0, 1.0);

/// Soft selection glow
pub const ACCENT_GLOW: Color = Color::new(109.0 / 255.0, 40.0 / 255.0, 217.0 / 255.0, 0.3);

/// Thin brush centerline (#a855f7)
pub const BRUSH_LINE: Color = Color::new(168.0 / 255.0, 85.0 / 255.0, 247.0 / 255.0, 1.0);

/// Wide translucent brush coverage
pub const BRUSH_COVERAGE: Color = Color::new(1.0, 1.0, 1.0, 0.5);

/// Canvas backdrop (#050505)
pub const CANVAS_BACKGROUND: Color = Color::new(5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0, 1.0);

/// Background grid dots (#333333)
pub const GRID_DOT: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Stand-in fill for layers whose image failed to load
pub const PLACEHOLDER: Color = Color::new(0.16, 0.16, 0.16, 1.0);

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
