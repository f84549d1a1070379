//! Rendering module
//!
//! The game draws through the `Surface` trait; hosts supply the backend.

pub mod recording;
pub mod scene;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render;
pub use surface::{Color, Sprite, Surface, with_saved};
