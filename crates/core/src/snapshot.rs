use serde::{Deserialize, Serialize};

use crate::config::ReductionRule;
use crate::types::{Coord, Grid, Tile};

/// FNV-1a 64-bit hash of the grid, row-major, little-endian tile bytes.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for (_, value) in grid.cells() {
        for b in value.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
    }
    h
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub grid_hash: u64,
    pub score: u64,
    pub moves: u32,
    pub best_tile: Tile,
    pub last_spawn: Option<Coord>,
    pub started: bool,
    pub game_over: bool,
    pub reduction: ReductionRule,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = Grid::empty();
        self.grid_hash = grid_hash(&self.grid);
        self.score = 0;
        self.moves = 0;
        self.best_tile = 0;
        self.last_spawn = None;
        self.started = false;
        self.game_over = false;
        self.reduction = ReductionRule::default();
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: Grid::empty(),
            grid_hash: 0,
            score: 0,
            moves: 0,
            best_tile: 0,
            last_spawn: None,
            started: false,
            game_over: false,
            reduction: ReductionRule::default(),
        };
        s.clear();
        s
    }
}
