//! Gesture scripts: a layer fixture plus a sequence of pointer events, replayed
//! against a [`LayerStore`] host.
//!
//! # Example script
//! ```toml
//! tool = "cutout-brush"
//! selected = "photo"
//!
//! [[layer]]
//! id = "photo"
//! src = "photo.png"
//! x = 100.0
//! y = 100.0
//! width = 200.0
//! height = 200.0
//!
//! [[event]]
//! type = "down"
//! x = 150.0
//! y = 150.0
//!
//! [[event]]
//! type = "up"
//! x = 150.0
//! y = 150.0
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::camera::CameraTransform;
use crate::host::{CanvasHost, LayerStore};
use crate::input::{CanvasSession, Modifiers, MouseButton, SessionSettings, ToolMode};
use crate::layer::{Layer, LayerId};
use crate::util::ScreenPoint;

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read gesture script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid gesture script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate layer id '{0}'")]
    DuplicateLayer(String),

    #[error("selected layer '{0}' is not defined")]
    UnknownSelection(String),

    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Size and placement of the canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    #[serde(default = "default_viewport_width")]
    pub width: u32,
    #[serde(default = "default_viewport_height")]
    pub height: u32,
    /// Canvas top-left in client coordinates
    #[serde(default)]
    pub origin_x: f64,
    #[serde(default)]
    pub origin_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

fn default_viewport_width() -> u32 {
    800
}

fn default_viewport_height() -> u32 {
    600
}

/// Initial camera. Values are clamped like any other camera update.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraFixture {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// One layer of the starting document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerFixture {
    pub id: String,
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub erase_mask: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl From<&LayerFixture> for Layer {
    fn from(fixture: &LayerFixture) -> Self {
        let mut layer = Layer::new(
            fixture.id.clone(),
            fixture.src.clone(),
            fixture.x,
            fixture.y,
            fixture.width,
            fixture.height,
        );
        layer.z_index = fixture.z_index;
        layer.visible = fixture.visible;
        layer.erase_mask = fixture.erase_mask.clone();
        if let Some(name) = &fixture.name {
            layer.name = name.clone();
        }
        layer
    }
}

/// A scripted input or host-side change. Pointer positions are client coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Pointer press
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
    /// Pointer motion
    Move { x: f64, y: f64 },
    /// Pointer release
    Up { x: f64, y: f64 },
    /// Pointer left the canvas
    Leave { x: f64, y: f64 },
    /// Wheel or trackpad scroll
    Wheel {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
    /// Host switches the active tool
    Tool { mode: ToolMode },
    /// Command from the layer's contextual menu
    Action { action: String, id: String },
    /// Host installs (or clears) a layer's erase mask, as after a fulfilled cutout
    Mask {
        id: String,
        #[serde(default)]
        mask: Option<String>,
    },
}

/// A parsed and validated gesture script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub camera: Option<CameraFixture>,
    #[serde(default)]
    pub tool: ToolMode,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default, rename = "layer")]
    pub layers: Vec<LayerFixture>,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl FromStr for Script {
    type Err = ReplayError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let script: Script = toml::from_str(source)?;
        script.validate()?;
        Ok(script)
    }
}

impl Script {
    /// Reads and validates a script file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let source = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script: Script = source.parse()?;
        info!(
            "Loaded gesture script {} ({} layer(s), {} event(s))",
            path.display(),
            script.layers.len(),
            script.events.len()
        );
        Ok(script)
    }

    fn validate(&self) -> Result<(), ReplayError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ReplayError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let mut seen = HashSet::new();
        for layer in &self.layers {
            if !seen.insert(layer.id.as_str()) {
                return Err(ReplayError::DuplicateLayer(layer.id.clone()));
            }
            if !(layer.width > 0.0 && layer.height > 0.0) {
                warn!(
                    "Layer '{}' has size {}x{}; it will be neither drawn nor hittable",
                    layer.id, layer.width, layer.height
                );
            }
        }

        if let Some(selected) = &self.selected {
            if !seen.contains(selected.as_str()) {
                return Err(ReplayError::UnknownSelection(selected.clone()));
            }
        }
        Ok(())
    }

    /// Builds the host and session described by the fixture, before any event.
    pub fn setup(&self, settings: SessionSettings) -> Replay {
        let layers = self.layers.iter().map(Layer::from).collect();
        let mut store = LayerStore::new(layers, self.tool);
        if let Some(selected) = &self.selected {
            store.select_layer(Some(&LayerId::new(selected.clone())));
            // Initial state, not a callback
            store.take_log();
        }

        let mut session = CanvasSession::new(settings);
        session.set_viewport_origin(self.viewport.origin_x, self.viewport.origin_y);
        if let Some(camera) = self.camera {
            *session.camera_mut() =
                CameraTransform::with_view(camera.scale, camera.offset_x, camera.offset_y);
        }

        Replay {
            store,
            session,
            viewport: self.viewport,
        }
    }

    /// Replays every event and returns the final state.
    pub fn run(&self, settings: SessionSettings) -> Replay {
        let mut replay = self.setup(settings);
        for (index, event) in self.events.iter().enumerate() {
            debug!("Event #{index}: {event:?}");
            replay.apply(event);
        }
        replay
    }
}

/// Host and session state while a script plays.
pub struct Replay {
    pub store: LayerStore,
    pub session: CanvasSession,
    pub viewport: Viewport,
}

impl Replay {
    /// Feeds one event to the session (or the host, for host-side changes).
    pub fn apply(&mut self, event: &ScriptEvent) {
        let Replay { store, session, .. } = self;
        match event {
            ScriptEvent::Down {
                x,
                y,
                button,
                shift,
                ctrl,
                alt,
                meta,
            } => {
                let modifiers = Modifiers {
                    shift: *shift,
                    ctrl: *ctrl,
                    alt: *alt,
                    meta: *meta,
                };
                session.on_pointer_down(store, *button, ScreenPoint::new(*x, *y), modifiers);
            }
            ScriptEvent::Move { x, y } => {
                session.on_pointer_move(store, ScreenPoint::new(*x, *y));
            }
            ScriptEvent::Up { x, y } => {
                session.on_pointer_up(store, ScreenPoint::new(*x, *y));
            }
            ScriptEvent::Leave { x, y } => {
                session.on_pointer_leave(store, ScreenPoint::new(*x, *y));
            }
            ScriptEvent::Wheel { dx, dy, ctrl, meta } => {
                let modifiers = Modifiers {
                    ctrl: *ctrl,
                    meta: *meta,
                    ..Modifiers::default()
                };
                session.on_wheel(*dx, *dy, modifiers);
            }
            ScriptEvent::Tool { mode } => {
                info!("Tool -> {}", mode.label());
                store.set_mode(*mode);
            }
            ScriptEvent::Action { action, id } => {
                session.on_layer_action(store, action, &LayerId::new(id.clone()));
            }
            ScriptEvent::Mask { id, mask } => {
                if !store.set_erase_mask(&LayerId::new(id.clone()), mask.clone()) {
                    warn!("Cannot set erase mask on unknown layer '{id}'");
                }
            }
        }
    }
}
