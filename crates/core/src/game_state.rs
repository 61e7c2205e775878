//! Game state module - one running game session
//!
//! The engine is stateless; `GameState` is the caller-side bookkeeping that
//! the engine deliberately leaves out: the current grid, cumulative score,
//! move counter and terminal flag, plus its own random source.
//!
//! A move that leaves the grid unchanged is not a move: nothing spawns and
//! the counters stay put.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::rng::{SimpleRng, TileSource};
use crate::snapshot::{grid_hash, GameSnapshot};
use crate::types::{Coord, Direction, Grid, Tile};

/// Number of tiles placed by [`GameState::start`]
pub const STARTING_TILES: usize = 2;

/// Outcome of [`GameState::apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Whether the push changed the grid
    pub moved: bool,
    /// Points earned by this move
    pub score_delta: u64,
    /// Where the follow-up tile spawned
    pub spawned: Option<Coord>,
    /// Whether an opposite-sign pair cancelled out
    pub reduced: bool,
    /// Whether the game is over after this move
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    engine: Engine,
    source: S,
    grid: Grid,
    score: u64,
    moves: u32,
    last_spawn: Option<Coord>,
    started: bool,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// New session with default rules and a seeded LCG
    pub fn new(seed: u32) -> Self {
        Self::with_source(EngineConfig::default(), SimpleRng::new(seed))
    }
}

impl<S: TileSource> GameState<S> {
    pub fn with_source(config: EngineConfig, source: S) -> Self {
        Self {
            engine: Engine::new(config),
            source,
            grid: Grid::empty(),
            score: 0,
            moves: 0,
            last_spawn: None,
            started: false,
            game_over: false,
        }
    }

    /// Reset and place the starting tiles
    pub fn start(&mut self) {
        self.grid = Grid::empty();
        self.score = 0;
        self.moves = 0;
        self.last_spawn = None;

        for _ in 0..STARTING_TILES {
            let spawn = self.engine.add_random_tile(self.grid, &mut self.source);
            self.grid = spawn.grid;
            self.last_spawn = spawn.spawned;
        }

        self.started = true;
        self.game_over = self.engine.is_game_over(self.grid);
        log::debug!("game started\n{}", self.grid);
    }

    /// Resume from an existing grid (e.g. one restored by the caller)
    pub fn load(&mut self, grid: Grid, score: u64) {
        self.grid = grid;
        self.score = score;
        self.moves = 0;
        self.last_spawn = None;
        self.started = true;
        self.game_over = self.engine.is_game_over(grid);
    }

    /// Push towards `direction`; spawn a tile if the grid changed
    pub fn apply_move(&mut self, direction: Direction) -> StepResult {
        if !self.started || self.game_over {
            return StepResult {
                game_over: self.game_over,
                ..StepResult::default()
            };
        }

        let outcome = self.engine.push(self.grid, direction);
        if !outcome.changed {
            return StepResult::default();
        }

        let spawn = self.engine.add_random_tile(outcome.grid, &mut self.source);
        self.grid = spawn.grid;
        self.last_spawn = spawn.spawned;
        self.score = self.score.saturating_add(outcome.score);
        self.moves += 1;
        self.game_over = self.engine.is_game_over(self.grid);

        if self.game_over {
            log::info!(
                "game over after {} moves, score {}, best tile {}",
                self.moves,
                self.score,
                self.best_tile()
            );
        }

        StepResult {
            moved: true,
            score_delta: outcome.score,
            spawned: spawn.spawned,
            reduced: outcome.reduced,
            game_over: self.game_over,
        }
    }

    /// Directions that would change the current grid
    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.engine.legal_directions(self.grid)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_spawn(&self) -> Option<Coord> {
        self.last_spawn
    }

    pub fn best_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.grid_hash = grid_hash(&self.grid);
        out.score = self.score;
        out.moves = self.moves;
        out.best_tile = self.best_tile();
        out.last_spawn = self.last_spawn;
        out.started = self.started;
        out.game_over = self.game_over;
        out.reduction = self.engine.config().reduction;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
