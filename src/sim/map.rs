//! Tiled backdrop the helicopter flies over
//!
//! The layout is generated once from a seed. Rows stack upward from the
//! bottom of the world.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAP_ROWS, TILE_SIZE, WATER_ANIM_PERIOD, WORLD_MAX_Y, WORLD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Water,
    Sand,
    Grass,
    Forest,
}

#[derive(Debug, Clone)]
pub struct Map {
    pub seed: u64,
    columns: usize,
    /// Row-major, row 0 at the bottom of the world
    tiles: Vec<Tile>,
    /// Animation clock (ms)
    clock: f32,
}

impl Map {
    pub fn new(seed: u64) -> Self {
        let columns = (WORLD_WIDTH / TILE_SIZE).ceil() as usize;
        let mut rng = Pcg32::seed_from_u64(seed);

        // River down the middle that wanders one column at a time
        let mut river = columns / 2;
        let mut tiles = Vec::with_capacity(columns * MAP_ROWS);
        for _ in 0..MAP_ROWS {
            match rng.random_range(0..3) {
                0 if river > 1 => river -= 1,
                1 if river + 2 < columns => river += 1,
                _ => {}
            }
            for col in 0..columns {
                let dist = col.abs_diff(river);
                let tile = match dist {
                    0 => Tile::Water,
                    1 => Tile::Sand,
                    _ if rng.random_bool(0.3) => Tile::Forest,
                    _ => Tile::Grass,
                };
                tiles.push(tile);
            }
        }

        Self {
            seed,
            columns,
            tiles,
            clock: 0.0,
        }
    }

    pub fn update(&mut self, elapsed_ms: f32) {
        self.clock = (self.clock + elapsed_ms) % (WATER_ANIM_PERIOD * 2.0);
    }

    /// Alternate water palette, flips every WATER_ANIM_PERIOD
    pub fn water_phase(&self) -> bool {
        self.clock >= WATER_ANIM_PERIOD
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        MAP_ROWS
    }

    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        if col >= self.columns {
            return None;
        }
        self.tiles.get(row * self.columns + col).copied()
    }

    /// Every tile with the world-space top-left corner it covers
    pub fn tiles(&self) -> impl Iterator<Item = (f32, f32, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            let col = i % self.columns;
            let row = i / self.columns;
            let x = col as f32 * TILE_SIZE;
            let y = WORLD_MAX_Y - (row + 1) as f32 * TILE_SIZE;
            (x, y, tile)
        })
    }
}
