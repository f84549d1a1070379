//! The player's helicopter

use glam::Vec2;

use super::bullet_pool::BulletPool;
use super::missile::Missile;
use super::tick::InputState;
use crate::consts::*;
use crate::vector;

/// Tri-state lean derived from horizontal velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Level,
    Right,
}

impl Facing {
    /// -1, 0 or 1
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Level => 0.0,
            Facing::Right => 1.0,
        }
    }

    fn from_velocity(vx: f32) -> Self {
        if vx < 0.0 {
            Facing::Left
        } else if vx > 0.0 {
            Facing::Right
        } else {
            Facing::Level
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    /// Recomputed from input every frame
    pub velocity: Vec2,
    pub angle: Facing,
    /// Trigger held
    pub shooting: bool,
    /// Milliseconds since the last shot (or since spawn)
    pub weapon_timer: f32,
    pub missile_count: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_MISSILES)
    }
}

impl Player {
    pub fn new(missile_count: u32) -> Self {
        Self {
            position: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            velocity: Vec2::ZERO,
            angle: Facing::Level,
            shooting: false,
            weapon_timer: 0.0,
            missile_count,
        }
    }

    /// Apply input, move, clamp to the world and fire if the weapon is ready
    pub fn update(&mut self, elapsed_ms: f32, input: &InputState, bullets: &mut BulletPool) {
        self.weapon_timer += elapsed_ms;

        let mut vx = 0.0;
        if input.left {
            vx -= PLAYER_SPEED;
        }
        if input.right {
            vx += PLAYER_SPEED;
        }
        let mut vy = 0.0;
        if input.up {
            vy -= PLAYER_SPEED - 2.0;
        }
        if input.down {
            vy += PLAYER_SPEED - 2.0;
        }
        self.velocity = Vec2::new(vx, vy);
        self.angle = Facing::from_velocity(vx);

        self.position += self.velocity;

        // No lower bound on y: the player may fly upward indefinitely
        self.position.x = self.position.x.clamp(0.0, WORLD_WIDTH);
        self.position.y = self.position.y.min(WORLD_MAX_Y);

        if self.shooting && self.weapon_timer >= WEAPON_COOLDOWN {
            self.fire_bullet(Vec2::NEG_Y, bullets);
            self.weapon_timer = 0.0;
        }
    }

    /// Fire a bullet from the player's position along `direction`
    pub fn fire_bullet(&self, direction: Vec2, bullets: &mut BulletPool) {
        let velocity = vector::scale(vector::normalize(direction), BULLET_SPEED);
        bullets.add(self.position, velocity);
    }

    /// Launch a missile if any remain; otherwise do nothing.
    /// Returns whether a missile was launched.
    pub fn fire_missile(&mut self, missiles: &mut Vec<Missile>, now_ms: f64) -> bool {
        if self.missile_count == 0 {
            log::debug!("Missile requested with none left");
            return false;
        }
        let direction = match self.angle {
            Facing::Left => -1.0,
            Facing::Level | Facing::Right => 1.0,
        };
        missiles.push(Missile::new(self.position, direction, now_ms));
        self.missile_count -= 1;
        log::debug!("Missile fired, {} left", self.missile_count);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(left: bool, right: bool, up: bool, down: bool) -> InputState {
        InputState {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn test_left_input_sets_velocity_and_angle() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(4);
        player.update(16.0, &held(true, false, false, false), &mut pool);
        assert_eq!(player.velocity.x, -PLAYER_SPEED);
        assert_eq!(player.angle, Facing::Left);
        assert_eq!(player.angle.sign(), -1.0);
        assert_eq!(player.position.x, PLAYER_START.0 - PLAYER_SPEED);
    }

    #[test]
    fn test_velocity_is_not_accumulated() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(4);
        let right = held(false, true, false, false);
        player.update(16.0, &right, &mut pool);
        player.update(16.0, &right, &mut pool);
        assert_eq!(player.velocity.x, PLAYER_SPEED);
        assert_eq!(player.angle, Facing::Right);

        player.update(16.0, &InputState::default(), &mut pool);
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_eq!(player.angle, Facing::Level);
    }

    #[test]
    fn test_vertical_speed_is_slower() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(4);
        player.update(16.0, &held(false, false, true, false), &mut pool);
        assert_eq!(player.velocity.y, -(PLAYER_SPEED - 2.0));
        player.update(16.0, &held(false, false, false, true), &mut pool);
        assert_eq!(player.velocity.y, PLAYER_SPEED - 2.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(4);
        player.update(16.0, &held(true, true, true, true), &mut pool);
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_eq!(player.angle, Facing::Level);
    }

    #[test]
    fn test_clamps_to_world() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(4);

        player.position = Vec2::new(2.0, WORLD_MAX_Y - 1.0);
        player.update(16.0, &held(true, false, false, true), &mut pool);
        assert_eq!(player.position, Vec2::new(0.0, WORLD_MAX_Y));

        player.position = Vec2::new(WORLD_WIDTH - 1.0, 0.0);
        player.update(16.0, &held(false, true, true, false), &mut pool);
        assert_eq!(player.position.x, WORLD_WIDTH);
        // Upward motion past y = 0 is allowed
        assert!(player.position.y < 0.0);
    }

    #[test]
    fn test_weapon_cooldown_gate() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(8);
        player.shooting = true;

        player.update(150.0, &InputState::default(), &mut pool);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(player.weapon_timer, 150.0);

        player.update(50.0, &InputState::default(), &mut pool);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(player.weapon_timer, 0.0);

        let bullet = pool.iter_active().next().copied().unwrap();
        assert_eq!(bullet.position, player.position);
        assert_eq!(bullet.velocity, Vec2::new(0.0, -BULLET_SPEED));
    }

    #[test]
    fn test_timer_keeps_running_while_not_shooting() {
        let mut player = Player::default();
        let mut pool = BulletPool::new(8);
        player.update(500.0, &InputState::default(), &mut pool);
        assert_eq!(pool.active_count(), 0);

        // Ready immediately once the trigger is pulled
        player.shooting = true;
        player.update(0.0, &InputState::default(), &mut pool);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_fire_bullet_with_zero_direction() {
        let player = Player::default();
        let mut pool = BulletPool::new(2);
        player.fire_bullet(Vec2::ZERO, &mut pool);
        let bullet = pool.iter_active().next().copied().unwrap();
        assert_eq!(bullet.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_fire_missile_until_empty() {
        let mut player = Player::new(4);
        let mut missiles = Vec::new();
        let fired: Vec<bool> = (0..5)
            .map(|i| player.fire_missile(&mut missiles, i as f64))
            .collect();
        assert_eq!(fired, vec![true, true, true, true, false]);
        assert_eq!(missiles.len(), 4);
        assert_eq!(player.missile_count, 0);
    }

    #[test]
    fn test_missile_follows_facing() {
        let mut player = Player::default();
        let mut missiles = Vec::new();
        player.angle = Facing::Left;
        player.fire_missile(&mut missiles, 0.0);
        player.angle = Facing::Level;
        player.fire_missile(&mut missiles, 0.0);
        assert_eq!(missiles[0].direction, -1.0);
        assert_eq!(missiles[1].direction, 1.0);
        assert_eq!(missiles[0].position, player.position);
    }

    proptest! {
        #[test]
        fn position_stays_in_bounds(
            start_x in -100.0f32..1200.0,
            start_y in -2000.0f32..900.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 1..50),
        ) {
            let mut player = Player::default();
            let mut pool = BulletPool::new(4);
            player.position = Vec2::new(start_x, start_y);
            for (l, r, u, d) in moves {
                player.update(16.0, &held(l, r, u, d), &mut pool);
                prop_assert!(player.position.x >= 0.0 && player.position.x <= WORLD_WIDTH);
                prop_assert!(player.position.y <= WORLD_MAX_Y);
            }
        }
    }
}
