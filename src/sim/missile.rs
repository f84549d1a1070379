//! Missiles: unpooled, limited by the player's stock

use glam::Vec2;

use crate::consts::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Missile {
    pub position: Vec2,
    /// -1 flies left, 1 flies right
    pub direction: f32,
    /// Game clock (ms) at launch
    pub spawn_time: f64,
}

impl Missile {
    pub fn new(position: Vec2, direction: f32, spawn_time: f64) -> Self {
        Self {
            position,
            direction,
            spawn_time,
        }
    }

    /// Speed in units per nominal frame, growing with age
    pub fn speed(&self, now_ms: f64) -> f32 {
        let age_secs = ((now_ms - self.spawn_time).max(0.0) / 1000.0) as f32;
        (MISSILE_LAUNCH_SPEED + MISSILE_ACCEL * age_secs).min(MISSILE_MAX_SPEED)
    }

    pub fn update(&mut self, elapsed_ms: f32, now_ms: f64) {
        let step = elapsed_ms / NOMINAL_FRAME_MS;
        self.position.x += self.direction * self.speed(now_ms) * step;
    }
}
