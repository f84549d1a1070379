//! Platform glue
//!
//! Host-facing pieces that stay free of any windowing API:
//! - Frame timestamps to elapsed time
//! - Key names to game actions

pub mod clock;
pub mod keys;

pub use clock::FrameClock;
pub use keys::Key;
