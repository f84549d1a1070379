//! Heli Scroll - a scrolling helicopter shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (player, bullet pool, missiles, camera, map)
//! - `renderer`: Drawing surface abstraction and scene rendering
//! - `platform`: Host glue (frame clock, key mapping)
//! - `game`: Loop driver tying update and render together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Horizontal player speed (units per frame). Vertical speed is 2 slower.
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Bullet speed (units per frame)
    pub const BULLET_SPEED: f32 = 10.0;
    /// Milliseconds between shots while the trigger is held
    pub const WEAPON_COOLDOWN: f32 = 200.0;
    /// Missiles carried at the start of a session
    pub const STARTING_MISSILES: u32 = 4;
    /// Default bullet pool size
    pub const BULLET_POOL_CAPACITY: usize = 30;
    /// Largest pool a settings file may ask for
    pub const MAX_BULLET_CAPACITY: usize = 4096;

    /// Player spawn point
    pub const PLAYER_START: (f32, f32) = (200.0, 200.0);

    /// World bounds enforced on the player: x in [0, WORLD_WIDTH], y <= WORLD_MAX_Y.
    /// There is no lower bound on y; the world extends upward without limit.
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_MAX_Y: f32 = 786.0;

    /// Player sprite (source pixels) and the scale it is drawn at
    pub const SPRITE_SCALE: f32 = 0.67;
    pub const PLAYER_SPRITE_WIDTH: f32 = 99.0;
    pub const PLAYER_SPRITE_HEIGHT: f32 = 75.0;
    /// Sideways pixel shift per unit of facing when the helicopter leans
    pub const PLAYER_LEAN_SHIFT: f32 = 23.0;

    /// Bullets are drawn as small squares
    pub const BULLET_SIZE: f32 = 4.0;

    /// Missile flight: speeds in units per nominal frame, acceleration per second of age
    pub const MISSILE_LAUNCH_SPEED: f32 = 2.0;
    pub const MISSILE_MAX_SPEED: f32 = 14.0;
    pub const MISSILE_ACCEL: f32 = 12.0;
    pub const MISSILE_WIDTH: f32 = 24.0;
    pub const MISSILE_HEIGHT: f32 = 8.0;

    /// Nominal frame time (60 Hz) used when scaling per-frame speeds
    pub const NOMINAL_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest frame gap fed to the simulation (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: f32 = 250.0;

    /// Map tiling
    pub const TILE_SIZE: f32 = 64.0;
    pub const MAP_ROWS: usize = 48;
    /// Water palette flips this often (ms)
    pub const WATER_ANIM_PERIOD: f32 = 500.0;
}

/// Small vector helpers used by movement and firing code
pub mod vector {
    use glam::Vec2;

    #[inline]
    pub fn add(a: Vec2, b: Vec2) -> Vec2 {
        a + b
    }

    #[inline]
    pub fn scale(v: Vec2, s: f32) -> Vec2 {
        v * s
    }

    /// Unit-length copy of `v`; the zero vector (never NaN) when `v` has no length
    #[inline]
    pub fn normalize(v: Vec2) -> Vec2 {
        v.normalize_or_zero()
    }

}
