//! Viewport that follows the player
//!
//! The camera is centered on its target, then clamped so it never shows past
//! the left, right or bottom edge of the world. There is no top clamp, matching
//! the player's missing lower y bound.

use glam::Vec2;

use crate::consts::{WORLD_MAX_Y, WORLD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Top-left corner in world space
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Recompute the top-left corner from the target's position
    pub fn update(&mut self, target: Vec2) {
        let max_x = (WORLD_WIDTH - self.width).max(0.0);
        self.x = (target.x - self.width / 2.0).max(0.0).min(max_x);
        self.y = (target.y - self.height / 2.0).min(WORLD_MAX_Y - self.height);
    }

    /// True if `position` lies inside the current view (edges inclusive)
    pub fn on_screen(&self, position: Vec2) -> bool {
        position.x >= self.x
            && position.x <= self.x + self.width
            && position.y >= self.y
            && position.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Translation that maps world space to screen space
    pub fn offset(&self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }

    pub fn world_to_screen(&self, position: Vec2) -> Vec2 {
        position + self.offset()
    }
}
