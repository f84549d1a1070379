//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Elapsed time comes in from the loop driver
//! - Input arrives as a plain snapshot
//! - Single-threaded; the bullet pool needs no synchronization

pub mod bullet_pool;
pub mod camera;
pub mod map;
pub mod missile;
pub mod player;
pub mod state;
pub mod tick;

pub use bullet_pool::{Bullet, BulletPool, BulletTiming};
pub use camera::Camera;
pub use map::{Map, Tile};
pub use missile::Missile;
pub use player::{Facing, Player};
pub use state::GameState;
pub use tick::{InputState, sanitize_elapsed, update};
