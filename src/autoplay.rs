//! Autoplay - simple move-selection policies for headless runs
//!
//! These are smoke-test drivers for the engine, not solvers. Each policy only
//! ever picks among directions that change the grid.

use serde::Serialize;

use crate::core::{Engine, GameSnapshot, GameState, SimpleRng, TileSource};
use crate::types::{Direction, Grid};

/// Preference order for [`Policy::Corner`]
const CORNER_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Policy {
    /// First legal direction in the order down, left, right, up
    Corner,
    /// Uniformly random legal direction
    Random,
    /// Legal direction with the largest immediate score
    Greedy,
}

impl Policy {
    /// Choose the next direction, `None` if nothing moves
    pub fn choose(&self, engine: &Engine, grid: Grid, rng: &mut SimpleRng) -> Option<Direction> {
        match self {
            Policy::Corner => CORNER_ORDER
                .into_iter()
                .find(|&dir| engine.can_move(grid, dir)),
            Policy::Random => {
                let legal: arrayvec::ArrayVec<Direction, 4> =
                    engine.legal_directions(grid).collect();
                rng.choose(&legal)
            }
            Policy::Greedy => {
                let mut best: Option<(u64, Direction)> = None;
                for dir in CORNER_ORDER {
                    let outcome = engine.push(grid, dir);
                    if !outcome.changed {
                        continue;
                    }
                    if best.map_or(true, |(score, _)| outcome.score > score) {
                        best = Some((outcome.score, dir));
                    }
                }
                best.map(|(_, dir)| dir)
            }
        }
    }
}

/// Summary of one finished (or truncated) game
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub moves: u32,
    pub score: u64,
    pub reductions: u32,
    pub finished: bool,
    pub snapshot: GameSnapshot,
}

/// Drive `game` with `policy` until it ends or `max_moves` is reached
pub fn play<S: TileSource>(
    game_index: u32,
    game: &mut GameState<S>,
    policy: Policy,
    policy_rng: &mut SimpleRng,
    max_moves: Option<u32>,
) -> GameSummary {
    if !game.started() {
        game.start();
    }

    let mut reductions = 0u32;
    while !game.game_over() {
        if max_moves.is_some_and(|limit| game.moves() >= limit) {
            break;
        }

        let engine = *game.engine();
        let Some(dir) = policy.choose(&engine, game.grid(), policy_rng) else {
            break;
        };

        let step = game.apply_move(dir);
        if step.reduced {
            reductions += 1;
        }
        log::trace!("game {game_index}: {dir} -> +{}", step.score_delta);
    }

    GameSummary {
        game: game_index,
        moves: game.moves(),
        score: game.score(),
        reductions,
        finished: game.game_over(),
        snapshot: game.snapshot(),
    }
}
