//! Interactive layered-image canvas with cutout gestures.
//!
//! The crate owns the camera (pan and zoom), the pointer gesture state machine,
//! brush stroke recording, layer compositing with erase masks, and the hand-off of
//! cutout requests to a host. Layers and selection belong to the host, which is
//! reached through the [`host::CanvasHost`] trait.

pub mod brush;
pub mod camera;
pub mod config;
pub mod cutout;
pub mod draw;
pub mod host;
pub mod input;
pub mod layer;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
