//! Gesture state machine and canvas session state.

use crate::brush::{BrushPath, DEFAULT_STROKE_WIDTH};
use crate::camera::{CameraTransform, DEFAULT_ZOOM_SENSITIVITY};
use crate::config::Config;
use crate::host::{CanvasView, Effect};
use crate::input::{CursorIcon, ToolMode};
use crate::layer::LayerId;
use crate::util::{LogicalPoint, ScreenPoint};

/// The gesture currently in progress.
///
/// Exactly one variant is live at a time, so a pan, a layer drag and a brush
/// stroke can never overlap. Every release returns the machine to `Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    /// Not interacting - waiting for a press
    #[default]
    Idle,
    /// Camera offset follows the pointer
    Panning {
        /// Last pointer position (viewport pixels)
        last: ScreenPoint,
    },
    /// Layer position follows the pointer
    DraggingLayer {
        /// Layer being moved
        id: LayerId,
        /// Last pointer position (viewport pixels)
        last: ScreenPoint,
    },
    /// Recording a cutout brush stroke
    Brushing {
        /// Simplified stroke in logical coordinates
        path: BrushPath,
    },
    /// Click-cutout press on the background, resolved on release
    ClickPending,
    /// Click-cutout press on a layer, already dispatched on press
    ClickDispatched,
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Interaction::Panning { .. })
    }

    pub fn is_dragging_layer(&self) -> bool {
        matches!(self, Interaction::DraggingLayer { .. })
    }

    pub fn is_brushing(&self) -> bool {
        matches!(self, Interaction::Brushing { .. })
    }

    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Panning { .. } => "panning",
            Interaction::DraggingLayer { .. } => "dragging-layer",
            Interaction::Brushing { .. } => "brushing",
            Interaction::ClickPending => "click-pending",
            Interaction::ClickDispatched => "click-dispatched",
        }
    }
}

/// Tunables read from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Scale change per wheel delta unit while zooming
    pub zoom_sensitivity: f64,
    /// Brush diameter in screen pixels at 100% zoom
    pub brush_width: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            brush_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            zoom_sensitivity: config.camera.zoom_sensitivity,
            brush_width: config.brush.stroke_width,
        }
    }
}

/// Per-canvas interaction state: camera, active gesture and pointer indicator.
///
/// Layers, selection and tool mode are not stored here; the host passes them in
/// with every event through a [`CanvasView`] and receives changes as [`Effect`]s.
#[derive(Debug, Default)]
pub struct CanvasSession {
    pub(crate) camera: CameraTransform,
    pub(crate) interaction: Interaction,
    pub(crate) settings: SessionSettings,
    /// Top-left of the canvas viewport in client coordinates
    pub(crate) viewport_origin: ScreenPoint,
    /// Last pointer position over the canvas (viewport pixels)
    pub(crate) cursor: Option<ScreenPoint>,
}

impl CanvasSession {
    /// Creates an idle session with an identity camera.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> &CameraTransform {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraTransform {
        &mut self.camera
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Records where the canvas viewport starts in client coordinates.
    ///
    /// Pointer positions passed to the event handlers are client coordinates;
    /// this origin is subtracted before the camera is applied.
    pub fn set_viewport_origin(&mut self, x: f64, y: f64) {
        self.viewport_origin = ScreenPoint::new(x, y);
    }

    /// Converts a client position to viewport pixels.
    pub fn to_viewport(&self, client: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            client.x - self.viewport_origin.x,
            client.y - self.viewport_origin.y,
        )
    }

    /// Converts a client position to logical canvas units.
    pub fn to_logical(&self, client: ScreenPoint) -> LogicalPoint {
        self.camera.to_logical(self.to_viewport(client))
    }

    /// Stroke recorded so far, while brushing.
    pub fn brush_path(&self) -> Option<&BrushPath> {
        match &self.interaction {
            Interaction::Brushing { path } => Some(path),
            _ => None,
        }
    }

    /// Where to draw the brush indicator (viewport pixels), if it should be shown.
    ///
    /// Visible only in the brush tool, while not panning, and while the pointer is
    /// over the canvas.
    pub fn brush_cursor(&self, mode: ToolMode) -> Option<ScreenPoint> {
        if mode == ToolMode::CutoutBrush && !self.interaction.is_panning() {
            self.cursor
        } else {
            None
        }
    }

    /// Pointer icon the host should display over the canvas.
    pub fn cursor_icon(&self, mode: ToolMode) -> CursorIcon {
        if mode == ToolMode::Hand || self.interaction.is_panning() {
            return CursorIcon::Grab;
        }
        match mode {
            ToolMode::CutoutClick => CursorIcon::Crosshair,
            ToolMode::CutoutBrush => CursorIcon::Hidden,
            ToolMode::Select | ToolMode::Hand => CursorIcon::Default,
        }
    }

    /// Client position of the selected layer's top-right corner.
    ///
    /// Hosts anchor their contextual action menu here. Only available in Select
    /// mode with a visible selected layer.
    pub fn menu_anchor(&self, view: &CanvasView<'_>) -> Option<ScreenPoint> {
        if view.mode != ToolMode::Select {
            return None;
        }
        let layer = view.selected_layer().filter(|layer| layer.visible)?;
        let corner = self.camera.to_screen(layer.bounds()?.top_right());
        Some(ScreenPoint::new(
            corner.x + self.viewport_origin.x,
            corner.y + self.viewport_origin.y,
        ))
    }

    /// Routes a layer-menu command to the host.
    pub fn layer_action(&self, action: &str, id: &LayerId) -> Effect {
        Effect::LayerAction {
            action: action.to_string(),
            id: id.clone(),
        }
    }
}
