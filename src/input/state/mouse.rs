use crate::host::{CanvasHost, CanvasView, Effect, apply_all};
use crate::input::{Modifiers, MouseButton};
use crate::layer::LayerId;
use crate::util::ScreenPoint;
use log::debug;

use super::transitions::{GestureContext, Transition};
use super::CanvasSession;

impl CanvasSession {
    /// Processes a pointer press and delivers the resulting callbacks to `host`.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `position` - Pointer position in client coordinates
    /// * `modifiers` - Modifier keys held during the press
    pub fn on_pointer_down<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        button: MouseButton,
        position: ScreenPoint,
        modifiers: Modifiers,
    ) {
        let effects = self.pointer_down(&host.view(), button, position, modifiers);
        apply_all(effects, host);
    }

    /// Processes pointer motion and delivers the resulting callbacks to `host`.
    pub fn on_pointer_move<H: CanvasHost + ?Sized>(&mut self, host: &mut H, position: ScreenPoint) {
        let effects = self.pointer_move(&host.view(), position);
        apply_all(effects, host);
    }

    /// Processes a pointer release and delivers the resulting callbacks to `host`.
    pub fn on_pointer_up<H: CanvasHost + ?Sized>(&mut self, host: &mut H, position: ScreenPoint) {
        let effects = self.pointer_up(&host.view(), position);
        apply_all(effects, host);
    }

    /// The pointer left the canvas. Treated exactly like a release, so no gesture
    /// outlives the pointer's presence over the surface.
    pub fn on_pointer_leave<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: ScreenPoint,
    ) {
        let effects = self.pointer_leave(&host.view(), position);
        apply_all(effects, host);
    }

    /// Forwards a contextual-menu command for a layer.
    pub fn on_layer_action<H: CanvasHost + ?Sized>(
        &self,
        host: &mut H,
        action: &str,
        id: &LayerId,
    ) {
        self.layer_action(action, id).apply(host);
    }

    /// Processes a wheel event.
    ///
    /// With Ctrl or Meta held the wheel zooms about the canvas origin; otherwise it
    /// scrolls the canvas (trackpad two-finger pan).
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64, modifiers: Modifiers) {
        if modifiers.zooms_wheel() {
            self.camera.zoom(delta_y, self.settings.zoom_sensitivity);
            debug!("Zoom -> {}%", self.camera.zoom_percent());
        } else {
            self.camera.pan(-delta_x, -delta_y);
        }
    }

    /// Press transition without a host; returns the callbacks to deliver.
    pub fn pointer_down(
        &mut self,
        view: &CanvasView<'_>,
        button: MouseButton,
        position: ScreenPoint,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        let ctx = self.gesture_context(view, position, button, modifiers);
        let current = std::mem::take(&mut self.interaction);
        self.commit(current.label(), current.press(&ctx))
    }

    /// Motion transition without a host; returns the callbacks to deliver.
    pub fn pointer_move(&mut self, view: &CanvasView<'_>, position: ScreenPoint) -> Vec<Effect> {
        let ctx = self.gesture_context(view, position, MouseButton::Left, Modifiers::new());
        self.cursor = Some(ctx.point);
        let current = std::mem::take(&mut self.interaction);
        self.commit(current.label(), current.motion(&ctx))
    }

    /// Release transition without a host; returns the callbacks to deliver.
    pub fn pointer_up(&mut self, view: &CanvasView<'_>, position: ScreenPoint) -> Vec<Effect> {
        let ctx = self.gesture_context(view, position, MouseButton::Left, Modifiers::new());
        let current = std::mem::take(&mut self.interaction);
        self.commit(current.label(), current.release(&ctx))
    }

    /// Leave transition without a host; returns the callbacks to deliver.
    pub fn pointer_leave(&mut self, view: &CanvasView<'_>, position: ScreenPoint) -> Vec<Effect> {
        let effects = self.pointer_up(view, position);
        self.cursor = None;
        effects
    }

    fn gesture_context<'a>(
        &self,
        view: &CanvasView<'a>,
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> GestureContext<'a> {
        let point = self.to_viewport(position);
        GestureContext {
            view: *view,
            point,
            logical: self.camera.to_logical(point),
            scale: self.camera.scale(),
            brush_width: self.settings.brush_width,
            button,
            modifiers,
        }
    }

    fn commit(&mut self, before: &'static str, transition: Transition) -> Vec<Effect> {
        let Transition { next, effects, pan } = transition;
        if let Some((dx, dy)) = pan {
            self.camera.pan(dx, dy);
        }
        if before != next.label() {
            debug!("Gesture {before} -> {}", next.label());
        }
        self.interaction = next;
        effects
    }
}

