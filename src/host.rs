//! Boundary between the canvas engine and the application that owns the layers.
//!
//! The host supplies a fresh [`CanvasView`] for every event and receives the
//! engine's decisions through the [`CanvasHost`] callbacks. Effects are plain data,
//! so hosts that cannot lend themselves mutably while a view is borrowed can
//! collect them and apply later.

use crate::cutout::{self, CutoutRequest};
use crate::input::ToolMode;
use crate::layer::{self, Layer, LayerId, LayerPosition};
use log::debug;
use serde::Serialize;

/// Read-only snapshot of host state the engine needs for one event.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView<'a> {
    pub layers: &'a [Layer],
    pub selected: Option<&'a LayerId>,
    pub mode: ToolMode,
}

impl<'a> CanvasView<'a> {
    pub fn new(layers: &'a [Layer], selected: Option<&'a LayerId>, mode: ToolMode) -> Self {
        Self {
            layers,
            selected,
            mode,
        }
    }

    /// The selected layer, if the selection still resolves to a layer.
    pub fn selected_layer(&self) -> Option<&'a Layer> {
        self.selected.and_then(|id| layer::find(self.layers, id))
    }
}

/// Capabilities the engine needs from its owner.
pub trait CanvasHost {
    /// Current layers, selection and tool mode.
    fn view(&self) -> CanvasView<'_>;

    /// Selects a layer, or clears the selection with `None`.
    fn select_layer(&mut self, id: Option<&LayerId>);

    /// Moves a layer. Only position is ever updated by the canvas.
    fn update_layer(&mut self, id: &LayerId, position: LayerPosition);

    /// Contextual menu command; `action` is opaque to the canvas.
    fn layer_action(&mut self, action: &str, id: &LayerId);

    /// Receives a finished cutout request. Fire-and-forget.
    fn cutout(&mut self, request: CutoutRequest);
}

/// One outbound callback, as data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "callback", rename_all = "snake_case")]
pub enum Effect {
    SelectLayer {
        id: Option<LayerId>,
    },
    UpdateLayer {
        id: LayerId,
        #[serde(flatten)]
        position: LayerPosition,
    },
    LayerAction {
        action: String,
        id: LayerId,
    },
    Cutout {
        request: CutoutRequest,
    },
}

impl Effect {
    /// Delivers this effect to the host.
    pub fn apply<H: CanvasHost + ?Sized>(self, host: &mut H) {
        match self {
            Effect::SelectLayer { id } => host.select_layer(id.as_ref()),
            Effect::UpdateLayer { id, position } => host.update_layer(&id, position),
            Effect::LayerAction { action, id } => host.layer_action(&action, &id),
            Effect::Cutout { request } => cutout::dispatch(host, request),
        }
    }
}

/// Delivers effects in order.
pub fn apply_all<H: CanvasHost + ?Sized>(effects: Vec<Effect>, host: &mut H) {
    for effect in effects {
        effect.apply(host);
    }
}

/// In-memory host that owns a layer list and selection like an application would,
/// and logs every callback it receives.
///
/// Understands the `delete`, `toggle-visibility`, `bring-forward` and
/// `send-backward` layer actions; other tags are only logged.
#[derive(Debug, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
    selected: Option<LayerId>,
    mode: ToolMode,
    log: Vec<Effect>,
}

impl LayerStore {
    pub fn new(layers: Vec<Layer>, mode: ToolMode) -> Self {
        Self {
            layers,
            selected: None,
            mode,
            log: Vec::new(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        layer::find(&self.layers, id)
    }

    pub fn selected(&self) -> Option<&LayerId> {
        self.selected.as_ref()
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    /// Stores the result of a fulfilled cutout. Returns `false` for unknown layers.
    pub fn set_erase_mask(&mut self, id: &LayerId, mask: Option<String>) -> bool {
        match self.layers.iter_mut().find(|layer| &layer.id == id) {
            Some(layer) => {
                layer.erase_mask = mask;
                true
            }
            None => false,
        }
    }

    /// Every callback received so far, oldest first.
    pub fn log(&self) -> &[Effect] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.log)
    }

    /// Cutout requests received so far.
    pub fn cutouts(&self) -> Vec<&CutoutRequest> {
        self.log
            .iter()
            .filter_map(|effect| match effect {
                Effect::Cutout { request } => Some(request),
                _ => None,
            })
            .collect()
    }
}

impl CanvasHost for LayerStore {
    fn view(&self) -> CanvasView<'_> {
        CanvasView::new(&self.layers, self.selected.as_ref(), self.mode)
    }

    fn select_layer(&mut self, id: Option<&LayerId>) {
        self.log.push(Effect::SelectLayer { id: id.cloned() });
        self.selected = id.filter(|id| self.layer(id).is_some()).cloned();
    }

    fn update_layer(&mut self, id: &LayerId, position: LayerPosition) {
        self.log.push(Effect::UpdateLayer {
            id: id.clone(),
            position,
        });
        if let Some(layer) = self.layers.iter_mut().find(|layer| &layer.id == id) {
            layer.x = position.x;
            layer.y = position.y;
        }
    }

    fn layer_action(&mut self, action: &str, id: &LayerId) {
        self.log.push(Effect::LayerAction {
            action: action.to_string(),
            id: id.clone(),
        });

        let Some(index) = self.layers.iter().position(|layer| &layer.id == id) else {
            debug!("Layer action '{action}' for unknown layer {id}");
            return;
        };
        match action {
            "delete" => {
                self.layers.remove(index);
                if self.selected.as_ref() == Some(id) {
                    self.selected = None;
                }
            }
            "toggle-visibility" => {
                let layer = &mut self.layers[index];
                layer.visible = !layer.visible;
            }
            "bring-forward" => self.layers[index].z_index += 1,
            "send-backward" => self.layers[index].z_index -= 1,
            other => debug!("Layer action '{other}' has no built-in handler"),
        }
    }

    fn cutout(&mut self, request: CutoutRequest) {
        self.log.push(Effect::Cutout { request });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::LogicalPoint;

    fn store() -> LayerStore {
        LayerStore::new(
            vec![
                Layer::new("a", "a.png", 0.0, 0.0, 10.0, 10.0),
                Layer::new("b", "b.png", 20.0, 0.0, 10.0, 10.0),
            ],
            ToolMode::Select,
        )
    }

    #[test]
    fn selecting_unknown_layer_clears_selection() {
        let mut store = store();
        store.select_layer(Some(&LayerId::new("a")));
        assert_eq!(store.selected(), Some(&LayerId::new("a")));
        store.select_layer(Some(&LayerId::new("missing")));
        assert_eq!(store.selected(), None);
        assert_eq!(store.log().len(), 2);
    }

    #[test]
    fn effects_apply_through_callbacks() {
        let mut store = store();
        let effects = vec![
            Effect::SelectLayer {
                id: Some(LayerId::new("b")),
            },
            Effect::UpdateLayer {
                id: LayerId::new("b"),
                position: LayerPosition { x: 5.0, y: 6.0 },
            },
            Effect::Cutout {
                request: CutoutRequest::Click {
                    point: LogicalPoint::new(1.0, 1.0),
                },
            },
        ];
        apply_all(effects.clone(), &mut store);

        assert_eq!(store.log(), effects.as_slice());
        let b = store.layer(&LayerId::new("b")).unwrap();
        assert_eq!((b.x, b.y), (5.0, 6.0));
        assert_eq!(store.view().selected_layer().unwrap().id.as_str(), "b");
        assert_eq!(store.cutouts().len(), 1);
    }

    #[test]
    fn delete_action_removes_layer_and_selection() {
        let mut store = store();
        store.select_layer(Some(&LayerId::new("a")));
        store.layer_action("delete", &LayerId::new("a"));
        assert!(store.layer(&LayerId::new("a")).is_none());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn unknown_actions_are_only_logged() {
        let mut store = store();
        store.layer_action("duplicate", &LayerId::new("a"));
        store.layer_action("toggle-visibility", &LayerId::new("b"));
        assert_eq!(store.layers().len(), 2);
        assert!(!store.layer(&LayerId::new("b")).unwrap().visible);
        assert_eq!(store.log().len(), 2);
    }

    #[test]
    fn update_effect_serializes_flat_position() {
        let effect = Effect::UpdateLayer {
            id: LayerId::new("a"),
            position: LayerPosition { x: 1.0, y: 2.0 },
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["callback"], "update_layer");
        assert_eq!(json["id"], "a");
        assert_eq!(json["x"], 1.0);
    }
}
