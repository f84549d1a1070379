//! Scene rendering
//!
//! World entities are drawn in world coordinates under the camera
//! translation; the GUI is drawn afterwards in screen coordinates.

use super::surface::{Color, Sprite, Surface, with_saved};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{BulletPool, GameState, Map, Missile, Player, Tile};

/// Draw one frame
pub fn render<S>(state: &GameState, elapsed_ms: f32, settings: &Settings, surface: &mut S)
where
    S: Surface + ?Sized,
{
    let camera = &state.camera;
    surface.set_fill(Color::BLACK);
    surface.fill_rect(0.0, 0.0, camera.width, camera.height);

    with_saved(surface, |s| {
        let offset = camera.offset();
        s.translate(offset.x, offset.y);
        render_world(state, elapsed_ms, settings, s);
    });

    render_gui(state, elapsed_ms, surface);
}

/// Map, bullets, missiles, player - in that order
fn render_world<S>(state: &GameState, elapsed_ms: f32, settings: &Settings, surface: &mut S)
where
    S: Surface + ?Sized,
{
    render_map(&state.map, surface);
    render_bullets(&state.bullets, elapsed_ms, surface);
    for missile in &state.missiles {
        render_missile(missile, elapsed_ms, surface);
    }
    render_player(&state.player, elapsed_ms, settings.debug_marker, surface);
}

/// Screen-space overlay. Nothing is drawn yet.
fn render_gui<S>(_state: &GameState, _elapsed_ms: f32, _surface: &mut S)
where
    S: Surface + ?Sized,
{
}

pub fn render_map<S>(map: &Map, surface: &mut S)
where
    S: Surface + ?Sized,
{
    let water = if map.water_phase() {
        Color::WATER_LIGHT
    } else {
        Color::WATER
    };
    for (x, y, tile) in map.tiles() {
        let color = match tile {
            Tile::Water => water,
            Tile::Sand => Color::SAND,
            Tile::Grass => Color::GRASS,
            Tile::Forest => Color::FOREST,
        };
        surface.set_fill(color);
        surface.fill_rect(x, y, TILE_SIZE, TILE_SIZE);
    }
}

/// Active bullets in slot order, centered on their positions
pub fn render_bullets<S>(bullets: &BulletPool, _elapsed_ms: f32, surface: &mut S)
where
    S: Surface + ?Sized,
{
    surface.set_fill(Color::YELLOW);
    let half = BULLET_SIZE / 2.0;
    for bullet in bullets.iter_active() {
        surface.fill_rect(
            bullet.position.x - half,
            bullet.position.y - half,
            BULLET_SIZE,
            BULLET_SIZE,
        );
    }
}

pub fn render_missile<S>(missile: &Missile, _elapsed_ms: f32, surface: &mut S)
where
    S: Surface + ?Sized,
{
    surface.draw_image(
        Sprite::Missile,
        missile.position.x - MISSILE_WIDTH / 2.0,
        missile.position.y - MISSILE_HEIGHT / 2.0,
        MISSILE_WIDTH,
        MISSILE_HEIGHT,
    );
}

/// Marker pixel at the exact position, then the sprite centered on it and
/// shifted toward the direction of travel
pub fn render_player<S>(player: &Player, _elapsed_ms: f32, debug_marker: bool, surface: &mut S)
where
    S: Surface + ?Sized,
{
    if debug_marker {
        surface.set_fill(Color::PINK);
        surface.fill_rect(player.position.x, player.position.y, 1.0, 1.0);
    }

    let w = PLAYER_SPRITE_WIDTH * SPRITE_SCALE;
    let h = PLAYER_SPRITE_HEIGHT * SPRITE_SCALE;
    let lean = player.angle.sign() * PLAYER_LEAN_SHIFT;
    with_saved(surface, |s| {
        s.translate(player.position.x, player.position.y);
        s.draw_image(Sprite::Player, -w / 2.0 + lean, -h / 2.0, w, h);
    });
}
