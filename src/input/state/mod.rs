mod core;
mod mouse;
mod render;
mod transitions;
#[cfg(test)]
mod tests;

pub use core::{CanvasSession, Interaction, SessionSettings};
