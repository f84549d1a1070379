//! Loop driver
//!
//! The host calls `frame` once per display refresh with the current
//! timestamp. Each frame runs `update` then `render` to completion before
//! control returns to the host.

use crate::platform::{FrameClock, Key};
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{self, GameState, InputState};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    settings: Settings,
    clock: FrameClock,
    /// Missile key currently down (launch is edge-triggered)
    missile_held: bool,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.validated();
        log::info!(
            "New game: viewport {}x{}, {} bullet slots, {} missiles, {:?} bullet timing",
            settings.viewport_width,
            settings.viewport_height,
            settings.bullet_capacity,
            settings.missile_count,
            settings.bullet_timing
        );
        Self {
            state: GameState::new(&settings),
            input: InputState::default(),
            settings,
            clock: FrameClock::new(),
            missile_held: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one frame for the host timestamp (ms)
    pub fn frame<S>(&mut self, timestamp: f64, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let elapsed = self.clock.tick(timestamp);
        self.update(elapsed);
        self.render(elapsed, surface);
    }

    /// Advance the simulation
    pub fn update(&mut self, elapsed_ms: f32) {
        sim::update(&mut self.state, &self.input, elapsed_ms);

        // Clear one-shot inputs after processing
        self.input.launch_missile = false;
    }

    pub fn render<S>(&self, elapsed_ms: f32, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        renderer::render(&self.state, elapsed_ms, &self.settings, surface);
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.input.up = true,
            Key::Down => self.input.down = true,
            Key::Left => self.input.left = true,
            Key::Right => self.input.right = true,
            Key::Fire => self.state.player.shooting = true,
            Key::Missile => {
                if !self.missile_held {
                    self.missile_held = true;
                    self.input.launch_missile = true;
                }
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.input.up = false,
            Key::Down => self.input.down = false,
            Key::Left => self.input.left = false,
            Key::Right => self.input.right = false,
            Key::Fire => self.state.player.shooting = false,
            Key::Missile => self.missile_held = false,
        }
    }

    /// Key events by DOM-style name; unmapped keys are ignored.
    /// Returns whether the key was handled.
    pub fn key_event(&mut self, name: &str, pressed: bool) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        if pressed {
            self.key_down(key);
        } else {
            self.key_up(key);
        }
        true
    }

    /// Start over with the same settings
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.settings);
        self.input = InputState::default();
        self.clock.reset();
        self.missile_held = false;
        log::info!("Game restarted");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RecordingSurface;
    use glam::Vec2;

    #[test]
    fn test_cooldown_scenario() {
        let mut game = Game::default();
        assert_eq!(game.state.player.position, Vec2::new(200.0, 200.0));
        game.key_down(Key::Fire);

        game.update(100.0);
        assert_eq!(game.state.bullets.active_count(), 0);
        assert_eq!(game.state.player.weapon_timer, 100.0);

        game.update(100.0);
        assert_eq!(game.state.bullets.active_count(), 1);
        assert_eq!(game.state.player.weapon_timer, 0.0);

        game.update(50.0);
        assert_eq!(game.state.player.weapon_timer, 50.0);
        assert_eq!(game.state.bullets.active_count(), 1);
    }

    #[test]
    fn test_weapon_recovers_after_nan_frame() {
        let mut game = Game::default();
        game.key_down(Key::Fire);

        game.update(f32::NAN);
        assert!(game.state.player.weapon_timer.is_finite());
        assert!(game.state.time_ms.is_finite());

        for _ in 0..10 {
            game.update(WEAPON_COOLDOWN);
        }
        assert_eq!(game.state.bullets.active_count(), 10);
        assert_eq!(game.state.time_ms, f64::from(WEAPON_COOLDOWN) * 10.0);
    }

    #[test]
    fn test_cooldown_scenario_through_timestamps() {
        let mut game = Game::default();
        let mut surface = RecordingSurface::with_all_sprites();
        game.key_event(" ", true);

        // First frame has no previous timestamp
        for t in [1_000.0, 1_100.0, 1_200.0, 1_250.0] {
            game.frame(t, &mut surface);
        }
        assert_eq!(game.state.frame, 4);
        assert_eq!(game.state.time_ms, 250.0);
        assert_eq!(game.state.bullets.active_count(), 1);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_held_missile_key_fires_once() {
        let mut game = Game::default();
        game.key_down(Key::Missile);
        game.update(16.0);
        // Key repeat while held
        game.key_down(Key::Missile);
        game.update(16.0);
        assert_eq!(game.state.missiles.len(), 1);

        game.key_up(Key::Missile);
        game.key_down(Key::Missile);
        game.update(16.0);
        assert_eq!(game.state.missiles.len(), 2);
    }

    #[test]
    fn test_five_missile_presses_with_four_missiles() {
        let mut game = Game::default();
        for _ in 0..5 {
            game.key_down(Key::Missile);
            game.update(16.0);
            game.key_up(Key::Missile);
        }
        assert_eq!(game.state.missiles.len(), 4);
        assert_eq!(game.state.player.missile_count, 0);
    }

    #[test]
    fn test_key_events_are_idempotent() {
        let mut game = Game::default();
        assert!(game.key_event("ArrowLeft", true));
        assert!(game.key_event("ArrowLeft", true));
        game.update(16.0);
        assert_eq!(game.state.player.velocity.x, -PLAYER_SPEED);
        assert!(game.key_event("ArrowLeft", false));
        game.update(16.0);
        assert_eq!(game.state.player.velocity.x, 0.0);
        assert!(!game.key_event("Escape", true));
    }

    #[test]
    fn test_pool_saturation_recycles() {
        let settings = Settings {
            bullet_capacity: 2,
            ..Default::default()
        };
        let mut game = Game::new(settings);
        game.key_down(Key::Fire);
        for _ in 0..5 {
            game.update(WEAPON_COOLDOWN);
        }
        assert_eq!(game.state.bullets.capacity(), 2);
        assert_eq!(game.state.bullets.active_count(), 2);
    }

    #[test]
    fn test_restart() {
        let mut game = Game::default();
        game.key_down(Key::Right);
        game.update(16.0);
        game.restart();
        assert_eq!(game.state.frame, 0);
        assert_eq!(game.input, InputState::default());
        assert_eq!(game.state.player.position, Vec2::new(PLAYER_START.0, PLAYER_START.1));
    }
}
