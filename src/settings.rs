//! Game settings
//!
//! Loaded from an optional JSON file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BULLET_POOL_CAPACITY, MAX_BULLET_CAPACITY, STARTING_MISSILES, WORLD_MAX_Y, WORLD_WIDTH,
};
use crate::sim::BulletTiming;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Gameplay ===
    /// Number of preallocated bullet slots
    pub bullet_capacity: usize,
    /// Missiles carried at the start
    pub missile_count: u32,
    /// Whether bullet speed follows the frame rate or elapsed time
    pub bullet_timing: BulletTiming,
    /// Seed for the map layout
    pub map_seed: u64,

    // === Debug ===
    /// Draw a 1x1 marker at the player's exact position
    pub debug_marker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: WORLD_WIDTH,
            viewport_height: WORLD_MAX_Y,
            bullet_capacity: BULLET_POOL_CAPACITY,
            missile_count: STARTING_MISSILES,
            bullet_timing: BulletTiming::PerFrame,
            map_seed: 0x5eed,
            debug_marker: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the game cannot run with
    pub fn validated(mut self) -> Self {
        if self.bullet_capacity == 0 {
            log::warn!("bullet_capacity must be at least 1");
            self.bullet_capacity = 1;
        }
        if self.bullet_capacity > MAX_BULLET_CAPACITY {
            log::warn!(
                "bullet_capacity {} too large, using {}",
                self.bullet_capacity,
                MAX_BULLET_CAPACITY
            );
            self.bullet_capacity = MAX_BULLET_CAPACITY;
        }
        if self.viewport_width.is_nan() || self.viewport_width < 1.0 {
            log::warn!("viewport_width {} too small, using 1", self.viewport_width);
            self.viewport_width = 1.0;
        }
        if self.viewport_height.is_nan() || self.viewport_height < 1.0 {
            log::warn!("viewport_height {} too small, using 1", self.viewport_height);
            self.viewport_height = 1.0;
        }
        self
    }
}
