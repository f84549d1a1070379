//! Fixed-capacity bullet pool
//!
//! All bullet storage is allocated once, up front. Firing writes into the
//! slot under a round-robin cursor, so a saturated pool recycles its oldest
//! slot instead of growing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BULLET_CAPACITY, NOMINAL_FRAME_MS};

/// A single projectile slot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bullet {
    pub position: Vec2,
    /// Units per frame
    pub velocity: Vec2,
    pub active: bool,
}

/// How bullet displacement relates to frame time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletTiming {
    /// Advance by the raw velocity once per update, regardless of elapsed time.
    /// Bullet speed is therefore tied to the display refresh rate.
    #[default]
    PerFrame,
    /// Advance by velocity * elapsed / NOMINAL_FRAME_MS
    Scaled,
}

impl BulletTiming {
    /// Displacement multiplier for one update of `elapsed_ms`
    pub fn step(self, elapsed_ms: f32) -> f32 {
        match self {
            BulletTiming::PerFrame => 1.0,
            BulletTiming::Scaled => elapsed_ms / NOMINAL_FRAME_MS,
        }
    }
}

/// Round-robin pool of reusable bullet slots
#[derive(Debug, Clone)]
pub struct BulletPool {
    slots: Box<[Bullet]>,
    /// Next slot to write
    cursor: usize,
}

impl BulletPool {
    /// Create a pool with `capacity` inactive slots, clamped to 1..=MAX_BULLET_CAPACITY
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(1, MAX_BULLET_CAPACITY);
        if clamped != capacity {
            log::warn!("Bullet pool capacity {} requested, using {}", capacity, clamped);
        }
        Self {
            slots: vec![Bullet::default(); clamped].into_boxed_slice(),
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the slot the next `add` will write
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Write an active bullet at the cursor and advance it.
    ///
    /// The slot is overwritten whether or not it is still in flight; there is
    /// no search for a free slot.
    pub fn add(&mut self, position: Vec2, velocity: Vec2) {
        let slot = &mut self.slots[self.cursor];
        if slot.active {
            log::debug!("Bullet pool saturated, recycling slot {}", self.cursor);
        }
        *slot = Bullet {
            position,
            velocity,
            active: true,
        };
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Advance every active bullet, then deactivate those for which `cull`
    /// returns true. A bullet that moves off-screen is culled in the same call.
    pub fn update<F>(&mut self, elapsed_ms: f32, timing: BulletTiming, mut cull: F)
    where
        F: FnMut(&Bullet) -> bool,
    {
        let step = timing.step(elapsed_ms);
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.position += bullet.velocity * step;
            if cull(&*bullet) {
                bullet.active = false;
            }
        }
    }

    /// Mark a slot inactive. Returns whether it was active; repeated calls are no-ops.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(bullet) if bullet.active => {
                bullet.active = false;
                true
            }
            _ => false,
        }
    }

    /// Active bullets in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = &Bullet> + '_ {
        self.slots.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// All slots, active or not
    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }
}
