//! Drawing surface abstraction
//!
//! The game draws through this narrow interface: solid rectangles, sprite
//! blits and a translatable coordinate frame with save/restore.

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const YELLOW: Color = Color::rgb(255, 230, 80);
    pub const WATER: Color = Color::rgb(40, 90, 180);
    pub const WATER_LIGHT: Color = Color::rgb(60, 120, 210);
    pub const SAND: Color = Color::rgb(210, 190, 130);
    pub const GRASS: Color = Color::rgb(70, 140, 60);
    pub const FOREST: Color = Color::rgb(30, 90, 40);
}

/// Images the game knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Missile,
}

impl Sprite {
    pub const ALL: [Sprite; 2] = [Sprite::Player, Sprite::Missile];
}

/// A 2D render target.
///
/// Implementations must not fail a frame: a sprite that is not loaded yet is
/// simply not drawn, and an unmatched `restore` is ignored.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the transform at the matching `save`
    fn restore(&mut self);
}

/// Run `f` between `save` and `restore`
pub fn with_saved<S, R>(surface: &mut S, f: impl FnOnce(&mut S) -> R) -> R
where
    S: Surface + ?Sized,
{
    surface.save();
    let result = f(surface);
    surface.restore();
    result
}
