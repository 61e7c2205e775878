//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the rule engine for a 4x4 sliding-tile merge puzzle.
//! It has **zero dependencies** on UI, storage, or networking:
//!
//! - **Pure**: every operation maps an input grid to an output grid
//! - **Reentrant**: [`Engine`] holds configuration only, no scratch state
//! - **Deterministic**: the one random step goes through an injectable
//!   [`TileSource`]
//!
//! # Module Structure
//!
//! - [`board`]: row primitives (`slide`, `combine`) and grid reorientation
//!   (`flip`, `rotate`)
//! - [`engine`]: directional pushes, spawning, game-over and max-edge lookup
//! - [`scoring`]: per-push merge accounting
//! - [`config`]: optional reduction rule
//! - [`rng`]: random sources for spawning
//! - [`game_state`]: a running session with cumulative score
//! - [`snapshot`]: serialisable view of a session
//!
//! # Rules
//!
//! - Equal neighbours fuse into their sum and score it (if positive).
//! - Mutually negated neighbours cancel out and score nothing.
//! - New tiles are `2` (90%) or one of `-2`/`-4` (5% each).
//! - The game is over when the grid is full and no neighbours can fuse.
//!
//! # Example
//!
//! ```
//! use twofortyeight_core::{Engine, SimpleRng};
//! use twofortyeight_types::{Direction, Grid};
//!
//! let engine = Engine::default();
//! let grid = Grid::new([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//!
//! let pushed = engine.push(grid, Direction::Left);
//! assert_eq!(pushed.grid.rows()[0], [4, 0, 0, 0]);
//! assert_eq!(pushed.score, 4);
//!
//! let mut rng = SimpleRng::new(12345);
//! let spawn = engine.add_random_tile(pushed.grid, &mut rng);
//! assert!(spawn.spawned.is_some());
//! assert!(!engine.is_game_over(spawn.grid));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use twofortyeight_types as types;

// Re-export commonly used types for convenience
pub use board::{combine, flip, rotate, slide, slide_and_combine};
pub use config::{EngineConfig, ReductionRule};
pub use engine::{
    add_random_tile, find_max_edge_tile, halve_max_edge_tile, is_game_over, Engine, MoveOutcome,
    SpawnOutcome,
};
pub use game_state::{GameState, StepResult};
pub use rng::{RandSource, SimpleRng, TileSource};
pub use scoring::MergeTally;
pub use snapshot::{grid_hash, GameSnapshot};
