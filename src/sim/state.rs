//! Game state aggregate
//!
//! Everything the loop driver advances and draws lives here, passed by
//! reference into update and render.

use super::bullet_pool::{BulletPool, BulletTiming};
use super::camera::Camera;
use super::map::Map;
use super::missile::Missile;
use super::player::Player;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub camera: Camera,
    /// Sole owner of bullet storage
    pub bullets: BulletPool,
    /// Missiles in flight, in launch order
    pub missiles: Vec<Missile>,
    pub bullet_timing: BulletTiming,
    /// Sum of all elapsed time fed to `update` (ms)
    pub time_ms: f64,
    /// Number of completed updates
    pub frame: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self {
            map: Map::new(settings.map_seed),
            player: Player::new(settings.missile_count),
            camera: Camera::new(settings.viewport_width, settings.viewport_height),
            bullets: BulletPool::new(settings.bullet_capacity),
            missiles: Vec::new(),
            bullet_timing: settings.bullet_timing,
            time_ms: 0.0,
            frame: 0,
        };
        // First frame should already be looking at the player
        state.camera.update(state.player.position);
        state
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
