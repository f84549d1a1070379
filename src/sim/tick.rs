//! Per-frame simulation update
//!
//! Advances the map, player, camera, bullets and missiles in that order.

use super::state::GameState;
use crate::consts::MAX_FRAME_MS;

/// Input snapshot for a single update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Launch one missile (one-shot, cleared by the driver after the update)
    pub launch_missile: bool,
}

/// Elapsed time the simulation will accept: NaN, infinite or negative become 0,
/// long gaps are capped at MAX_FRAME_MS
pub fn sanitize_elapsed(elapsed_ms: f32) -> f32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    elapsed_ms.min(MAX_FRAME_MS)
}

/// Advance the game by `elapsed_ms`
pub fn update(state: &mut GameState, input: &InputState, elapsed_ms: f32) {
    let elapsed_ms = sanitize_elapsed(elapsed_ms);
    state.time_ms += f64::from(elapsed_ms);
    state.frame += 1;

    state.map.update(elapsed_ms);

    state.player.update(elapsed_ms, input, &mut state.bullets);
    if input.launch_missile {
        state.player.fire_missile(&mut state.missiles, state.time_ms);
    }

    state.camera.update(state.player.position);

    let camera = state.camera;
    state
        .bullets
        .update(elapsed_ms, state.bullet_timing, |bullet| !camera.on_screen(bullet.position));

    let now = state.time_ms;
    for missile in &mut state.missiles {
        missile.update(elapsed_ms, now);
    }
    let before = state.missiles.len();
    state
        .missiles
        .retain(|m| (m.position.x - camera.x).abs() <= camera.width * 2.0);
    let removed = before - state.missiles.len();
    if removed > 0 {
        log::debug!("Removed {} missile(s) far off-screen", removed);
    }

    log::trace!(
        "frame {} dt={:.2}ms bullets={} missiles={}",
        state.frame,
        elapsed_ms,
        state.bullets.active_count(),
        state.missiles.len()
    );
}
