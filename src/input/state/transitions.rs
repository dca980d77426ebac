//! Pure gesture transitions: current state + event -> next state + effects.

use crate::brush::BrushPath;
use crate::host::{CanvasView, Effect};
use crate::input::{Modifiers, MouseButton, ToolMode};
use crate::layer::{self, Layer, LayerPosition};
use crate::util::{LogicalPoint, ScreenPoint};
use log::debug;

use super::Interaction;

/// Everything a transition may look at for one event.
pub(crate) struct GestureContext<'a> {
    pub view: CanvasView<'a>,
    /// Pointer position in viewport pixels
    pub point: ScreenPoint,
    /// Pointer position in logical units
    pub logical: LogicalPoint,
    pub scale: f64,
    pub brush_width: f64,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

/// Next state plus everything the transition asks of the outside world.
#[derive(Debug)]
pub(crate) struct Transition {
    pub next: Interaction,
    pub effects: Vec<Effect>,
    /// Camera pan in viewport pixels
    pub pan: Option<(f64, f64)>,
}

impl Transition {
    fn to(next: Interaction) -> Self {
        Self {
            next,
            effects: Vec::new(),
            pan: None,
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    fn select_if_needed(mut self, view: &CanvasView<'_>, layer: &Layer) -> Self {
        if view.selected != Some(&layer.id) {
            self.effects.push(Effect::SelectLayer {
                id: Some(layer.id.clone()),
            });
        }
        self
    }
}

impl Interaction {
    /// Pointer press. Any gesture still in progress is abandoned without effects.
    ///
    /// # Priority
    /// 1. Brush tool: start a stroke (selecting the layer under the pointer)
    /// 2. Click tool: dispatch on a layer now, or wait for release on the background
    /// 3. Middle button, Hand tool or Shift: pan
    /// 4. Background: clear the selection
    /// 5. Layer (Select tool): select it and start dragging
    pub(crate) fn press(self, ctx: &GestureContext<'_>) -> Transition {
        if !self.is_idle() {
            debug!("Press while {}; abandoning that gesture", self.label());
        }

        let view = &ctx.view;
        let target = layer::hit_test(view.layers, ctx.logical);

        match view.mode {
            ToolMode::CutoutBrush => {
                let next = Interaction::Brushing {
                    path: BrushPath::start(ctx.logical),
                };
                match target {
                    Some(layer) => Transition::to(next).select_if_needed(view, layer),
                    None => Transition::to(next),
                }
            }
            ToolMode::CutoutClick => match target {
                Some(layer) => Transition::to(Interaction::ClickDispatched)
                    .select_if_needed(view, layer)
                    .with_effect(click_cutout(ctx.logical)),
                None => Transition::to(Interaction::ClickPending),
            },
            _ if ctx.button == MouseButton::Middle
                || view.mode == ToolMode::Hand
                || ctx.modifiers.forces_pan() =>
            {
                Transition::to(Interaction::Panning { last: ctx.point })
            }
            _ => match target {
                None => Transition::to(Interaction::Idle)
                    .with_effect(Effect::SelectLayer { id: None }),
                Some(layer) => Transition::to(Interaction::DraggingLayer {
                    id: layer.id.clone(),
                    last: ctx.point,
                })
                .with_effect(Effect::SelectLayer {
                    id: Some(layer.id.clone()),
                }),
            },
        }
    }

    /// Pointer motion. Only the active gesture reacts.
    pub(crate) fn motion(self, ctx: &GestureContext<'_>) -> Transition {
        match self {
            Interaction::Brushing { mut path } => {
                path.push(ctx.logical);
                Transition::to(Interaction::Brushing { path })
            }
            Interaction::Panning { last } => {
                let mut transition = Transition::to(Interaction::Panning { last: ctx.point });
                transition.pan = Some(ctx.point.delta_from(last));
                transition
            }
            Interaction::DraggingLayer { id, last } => {
                let (dx, dy) = ctx.point.delta_from(last);
                let moved = layer::find(ctx.view.layers, &id).map(|layer| Effect::UpdateLayer {
                    id: id.clone(),
                    position: LayerPosition {
                        x: layer.x + dx / ctx.scale,
                        y: layer.y + dy / ctx.scale,
                    },
                });
                let transition = Transition::to(Interaction::DraggingLayer {
                    id,
                    last: ctx.point,
                });
                match moved {
                    Some(effect) => transition.with_effect(effect),
                    None => transition,
                }
            }
            other => Transition::to(other),
        }
    }

    /// Pointer release or leave. Always ends in `Idle`; safe on an idle machine.
    pub(crate) fn release(self, ctx: &GestureContext<'_>) -> Transition {
        let transition = Transition::to(Interaction::Idle);
        match self {
            Interaction::Brushing { path } => {
                let count = path.len();
                let target = ctx.view.selected_layer();
                match path.finalize(target, ctx.scale, ctx.brush_width) {
                    Some(request) => transition.with_effect(Effect::Cutout { request }),
                    None => {
                        debug!("Discarding brush stroke with {count} point(s)");
                        transition
                    }
                }
            }
            Interaction::ClickPending if ctx.view.mode == ToolMode::CutoutClick => {
                transition.with_effect(click_cutout(ctx.logical))
            }
            _ => transition,
        }
    }
}

fn click_cutout(point: LogicalPoint) -> Effect {
    Effect::Cutout {
        request: crate::cutout::CutoutRequest::Click { point },
    }
}
