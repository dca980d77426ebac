//! Pointer input handling and the gesture state machine.
//!
//! This module turns raw pointer and wheel events into canvas gestures. It owns
//! the camera and the active interaction (pan, layer drag, brush stroke, click
//! cutout) and reports everything that affects the host as [`crate::host::Effect`]s.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{CursorIcon, MouseButton};
pub use modifiers::Modifiers;
pub use state::{CanvasSession, Interaction, SessionSettings};
pub use tool::ToolMode;
