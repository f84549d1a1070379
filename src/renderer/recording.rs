//! In-memory surface that records what was drawn
//!
//! Used by the headless host and by tests. Coordinates are recorded after
//! the current translation has been applied, i.e. in screen space.

use std::collections::HashSet;

use glam::Vec2;

use super::surface::{Color, Sprite, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        color: Color,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Image {
        sprite: Sprite,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    fill: Color,
    offset: Vec2,
    stack: Vec<Vec2>,
    loaded: HashSet<Sprite>,
    commands: Vec<DrawCommand>,
    /// Draws dropped because the sprite was not loaded
    pub skipped_images: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            offset: Vec2::ZERO,
            stack: Vec::new(),
            loaded: HashSet::new(),
            commands: Vec::new(),
            skipped_images: 0,
        }
    }
}

impl RecordingSurface {
    /// Surface with no sprites available
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with every sprite available
    pub fn with_all_sprites() -> Self {
        let mut surface = Self::new();
        for sprite in Sprite::ALL {
            surface.mark_loaded(sprite);
        }
        surface
    }

    pub fn mark_loaded(&mut self, sprite: Sprite) {
        self.loaded.insert(sprite);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current translation
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Depth of the save stack (0 when balanced)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget recorded commands, keeping the transform and loaded sprites
    pub fn clear(&mut self) {
        self.commands.clear();
        self.skipped_images = 0;
    }
}

impl Surface for RecordingSurface {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect {
            color: self.fill,
            x: x + self.offset.x,
            y: y + self.offset.y,
            w,
            h,
        });
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        if !self.loaded.contains(&sprite) {
            log::trace!("{:?} not loaded, skipping draw", sprite);
            self.skipped_images += 1;
            return;
        }
        self.commands.push(DrawCommand::Image {
            sprite,
            x: x + self.offset.x,
            y: y + self.offset.y,
            w,
            h,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset += Vec2::new(dx, dy);
    }

    fn save(&mut self) {
        self.stack.push(self.offset);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(offset) => self.offset = offset,
            None => log::warn!("restore() without matching save()"),
        }
    }
}
