//! Engine module - directional pushes, spawning and terminal checks
//!
//! The engine only knows one real move: push every row to the right
//! ([`operate_rows`]). The other directions reorient the grid, push right and
//! undo the reorientation:
//!
//! | Direction | Before | After |
//! |-----------|--------|-------|
//! | right | - | - |
//! | left | flip | flip |
//! | up | rotate, flip | flip, rotate |
//! | down | rotate | rotate |
//!
//! [`Engine`] holds configuration only. Points and the reduction flag live in
//! a [`MergeTally`] created per push, so one engine can be shared freely
//! between threads and game sessions.

use crate::board::{flip, operate_rows, rotate};
use crate::config::{EngineConfig, ReductionRule};
use crate::rng::TileSource;
use crate::scoring::MergeTally;
use crate::types::{Coord, Direction, Grid, Tile, GRID_SIZE};

/// Geometric step used to reorient a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    Flip,
    Rotate,
}

impl Transform {
    #[inline]
    fn apply(self, grid: Grid) -> Grid {
        match self {
            Transform::Flip => flip(grid),
            Transform::Rotate => rotate(grid),
        }
    }
}

const NONE: &[Transform] = &[];
const FLIP: &[Transform] = &[Transform::Flip];
const ROTATE: &[Transform] = &[Transform::Rotate];
const ROTATE_FLIP: &[Transform] = &[Transform::Rotate, Transform::Flip];
const FLIP_ROTATE: &[Transform] = &[Transform::Flip, Transform::Rotate];

/// Transforms applied before and after the row pass for a direction
fn orientation(direction: Direction) -> (&'static [Transform], &'static [Transform]) {
    match direction {
        Direction::Right => (NONE, NONE),
        Direction::Left => (FLIP, FLIP),
        Direction::Up => (ROTATE_FLIP, FLIP_ROTATE),
        Direction::Down => (ROTATE, ROTATE),
    }
}

/// Result of one push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Points earned by merges during this push only
    pub score: u64,
    /// Whether an opposite-sign pair cancelled out
    pub reduced: bool,
    /// Tile halved by [`ReductionRule::HalveMaxEdge`], if the rule fired
    pub halved: Option<Coord>,
    /// Whether the resulting grid differs from the input
    pub changed: bool,
}

/// Result of a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnOutcome {
    pub grid: Grid,
    /// Where the new tile went, `None` if the grid was full
    pub spawned: Option<Coord>,
}

/// Stateless rule engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Push every tile towards `direction`, merging along the way
    pub fn push(&self, grid: Grid, direction: Direction) -> MoveOutcome {
        let mut tally = MergeTally::new();
        let (before, after) = orientation(direction);

        let mut out = before.iter().fold(grid, |g, t| t.apply(g));
        out = operate_rows(out, &mut tally);
        out = after.iter().fold(out, |g, t| t.apply(g));

        let mut halved = None;
        if tally.reduced && self.config.reduction == ReductionRule::HalveMaxEdge {
            let (g, at) = halve_max_edge_tile(out);
            if let Some(at) = at {
                log::trace!("reduction on {direction}: halved tile at {at:?}");
            }
            out = g;
            halved = at;
        }

        MoveOutcome {
            grid: out,
            score: tally.points,
            reduced: tally.reduced,
            halved,
            changed: out != grid,
        }
    }

    /// True if pushing towards `direction` would change the grid
    pub fn can_move(&self, grid: Grid, direction: Direction) -> bool {
        self.push(grid, direction).changed
    }

    /// Directions whose push changes the grid, in [`Direction::ALL`] order
    pub fn legal_directions(&self, grid: Grid) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.can_move(grid, dir))
    }

    /// See [`add_random_tile`]
    pub fn add_random_tile<S: TileSource>(&self, grid: Grid, source: &mut S) -> SpawnOutcome {
        add_random_tile(grid, source)
    }

    /// See [`is_game_over`]
    pub fn is_game_over(&self, grid: Grid) -> bool {
        is_game_over(grid)
    }

    /// See [`find_max_edge_tile`]
    pub fn find_max_edge_tile(&self, grid: Grid) -> Option<Coord> {
        find_max_edge_tile(grid)
    }
}

/// Two neighbouring values that a push would fuse
#[inline]
fn can_merge(a: Tile, b: Tile) -> bool {
    a == b || b.checked_neg() == Some(a)
}

/// True if no push in any direction could change the grid
///
/// That is: no empty cell, and no horizontal or vertical neighbours that are
/// equal or mutually negated.
pub fn is_game_over(grid: Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let rows = grid.rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = rows[r][c];
            if c + 1 < GRID_SIZE && can_merge(value, rows[r][c + 1]) {
                return false;
            }
            if r + 1 < GRID_SIZE && can_merge(value, rows[r + 1][c]) {
                return false;
            }
        }
    }

    true
}

/// Place one new tile on a uniformly chosen empty cell
///
/// A full grid comes back unchanged with no spawn position.
pub fn add_random_tile<S: TileSource>(grid: Grid, source: &mut S) -> SpawnOutcome {
    let empty = grid.empty_cells();
    let Some(at) = source.choose(&empty) else {
        log::debug!("spawn skipped: grid is full");
        return SpawnOutcome {
            grid,
            spawned: None,
        };
    };

    let mut out = grid;
    let value = source.spawn_value();
    out.set(at, value);
    log::trace!("spawned {value} at {at:?}");

    SpawnOutcome {
        grid: out,
        spawned: Some(at),
    }
}

/// Locate the maximum tile, biased towards a row edge
///
/// The first row (top to bottom) holding the largest tile wins. Within it:
/// the last occurrence if it sits in the final column, else column 0 if the
/// first occurrence is there, else the later of the two occurrences.
/// Empty cells never count, so on an all-negative grid the least negative
/// tile is picked. Returns `None` for a grid with no tiles.
pub fn find_max_edge_tile(grid: Grid) -> Option<Coord> {
    if grid.is_clear() {
        return None;
    }

    let max = grid.max_tile();
    let (row_idx, row) = grid
        .rows()
        .iter()
        .enumerate()
        .find(|(_, row)| row.contains(&max))?;

    let first = row.iter().position(|&v| v == max)?;
    let last = row.iter().rposition(|&v| v == max)?;

    let col = if last == GRID_SIZE - 1 {
        last
    } else if first == 0 {
        0
    } else {
        first.max(last)
    };

    Some(Coord::new(row_idx, col))
}

/// Integer-halve the tile found by [`find_max_edge_tile`]
///
/// Returns the (possibly) modified grid and the halved position.
pub fn halve_max_edge_tile(grid: Grid) -> (Grid, Option<Coord>) {
    let Some(at) = find_max_edge_tile(grid) else {
        return (grid, None);
    };

    let mut out = grid;
    out.set(at, grid.get(at) / 2);
    (out, Some(at))
}
