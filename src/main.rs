//! Heli Scroll native entry point
//!
//! Runs the game headless against a recording surface with scripted input.
//! Windowed hosts drive `Game::frame` from their own refresh callback.

use std::path::PathBuf;

use heli_scroll::renderer::RecordingSurface;
use heli_scroll::{Game, Settings};

/// Frames to simulate (10 seconds at 60 Hz)
const DEMO_FRAMES: u32 = 600;
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Scripted key presses: (frame, key name, pressed)
const SCRIPT: &[(u32, &str, bool)] = &[
    (10, " ", true),
    (30, "ArrowLeft", true),
    (90, "ArrowLeft", false),
    (90, "ArrowUp", true),
    (120, "m", true),
    (121, "m", false),
    (200, "ArrowRight", true),
    (260, "m", true),
    (261, "m", false),
    (400, "ArrowRight", false),
    (450, "ArrowUp", false),
    (500, " ", false),
];

fn main() {
    env_logger::init();
    log::info!("Heli Scroll (native) starting...");

    let settings = match std::env::var_os("HELI_SETTINGS") {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let mut game = Game::new(settings);
    let mut surface = RecordingSurface::with_all_sprites();

    let mut peak_bullets = 0;
    let mut draws = 0;
    for frame in 0..DEMO_FRAMES {
        for &(_, name, pressed) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            game.key_event(name, pressed);
        }

        surface.clear();
        game.frame(f64::from(frame) * FRAME_MS, &mut surface);

        peak_bullets = peak_bullets.max(game.state.bullets.active_count());
        draws += surface.commands().len();
    }

    let state = &game.state;
    log::info!(
        "Simulated {} frames ({:.1}s): player at ({:.0}, {:.0}), {} bullets active (peak {}/{}), {} missiles in flight, {} left",
        state.frame,
        state.time_ms / 1000.0,
        state.player.position.x,
        state.player.position.y,
        state.bullets.active_count(),
        peak_bullets,
        state.bullets.capacity(),
        state.missiles.len(),
        state.player.missile_count
    );
    log::info!("Issued {} draw commands", draws);
}
