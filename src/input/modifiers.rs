//! Keyboard modifier state accompanying pointer events.

/// Modifier keys held during a pointer or wheel event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
    /// Meta/Command key pressed
    pub meta: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift-only modifier set, used to force a pan.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Ctrl-only modifier set, used to zoom with the wheel.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Wheel events zoom instead of scroll while Ctrl or Meta is held.
    pub fn zooms_wheel(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Pressing with Shift held pans the canvas in the non-cutout tools.
    pub fn forces_pan(&self) -> bool {
        self.shift
    }
}
