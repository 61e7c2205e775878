//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain values (`Copy` where possible) so grids can be passed
//! in and handed back as immutable snapshots.
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 matrix of signed tile values:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | Empty cell |
//! | `> 0` | Normal tile (powers of two by convention, not enforced) |
//! | `< 0` | Reducible tile, cancels against its negation |
//!
//! Coordinates are `(row, col)` with row 0 at the top and col 0 at the left.
//!
//! # Spawning
//!
//! New tiles are `2` nine times out of ten. The remaining tenth is split
//! evenly between the reducible values `-2` and `-4`.
//!
//! # Examples
//!
//! ```
//! use twofortyeight_types::{Coord, Direction, Grid, GRID_SIZE};
//!
//! let mut grid = Grid::empty();
//! grid.set(Coord::new(1, 2), 8);
//! assert_eq!(grid.get(Coord::new(1, 2)), 8);
//! assert_eq!(grid.empty_cells().len(), GRID_SIZE * GRID_SIZE - 1);
//!
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.as_str(), "up");
//!
//! let parsed = Grid::from_rows(vec![vec![2, 0, 0, 0]; 4]).unwrap();
//! assert_eq!(parsed.tile_sum(), 8);
//! ```

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid side length (4 rows x 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value of an empty cell
pub const EMPTY: Tile = 0;

/// The common spawn value (90% of spawns)
pub const SPAWN_VALUE: Tile = 2;

/// Reducible spawn values, drawn uniformly for the remaining 10%
pub const REDUCIBLE_VALUES: [Tile; 2] = [-2, -4];

/// Spawn odds as `SPAWN_ODDS_NUMERATOR / SPAWN_ODDS_DENOMINATOR` for `SPAWN_VALUE`
pub const SPAWN_ODDS_NUMERATOR: usize = 9;
pub const SPAWN_ODDS_DENOMINATOR: usize = 10;

/// A single cell value
pub type Tile = i64;

/// One row (or reoriented column) of the grid, index 0 on the left
pub type Row = [Tile; GRID_SIZE];

/// Errors raised when building a grid from untrusted input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Wrong number of rows
    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    /// A row with the wrong number of cells
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Push directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell coordinate: row from the top, column from the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The 4x4 tile grid
///
/// Stored row-major as nested arrays, so it is `Copy` and every cell is
/// always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid([Row; GRID_SIZE]);

impl Grid {
    /// Create a grid with every cell empty
    pub const fn empty() -> Self {
        Self([[EMPTY; GRID_SIZE]; GRID_SIZE])
    }

    /// Wrap an existing row array
    pub const fn new(rows: [Row; GRID_SIZE]) -> Self {
        Self(rows)
    }

    /// Build a grid from dynamically sized rows, rejecting anything but 4x4
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                actual: rows.len(),
            });
        }

        let mut out = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row: r,
                    expected: GRID_SIZE,
                    actual: row.len(),
                });
            }
            out[r].copy_from_slice(row);
        }
        Ok(Self(out))
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.0
    }

    /// Unwrap into the raw row array
    pub fn into_rows(self) -> [Row; GRID_SIZE] {
        self.0
    }

    /// Get the value at `at`
    ///
    /// Panics if `at` lies outside the grid.
    #[inline(always)]
    pub fn get(&self, at: Coord) -> Tile {
        self.0[at.row][at.col]
    }

    /// Set the value at `at`
    ///
    /// Panics if `at` lies outside the grid.
    #[inline(always)]
    pub fn set(&mut self, at: Coord, value: Tile) {
        self.0[at.row][at.col] = value;
    }

    /// Iterate `(coord, value)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &value)| (Coord::new(r, c), value))
        })
    }

    /// Empty cells in row-major order (stack only, no allocation)
    pub fn empty_cells(&self) -> ArrayVec<Coord, CELL_COUNT> {
        self.cells()
            .filter(|&(_, value)| value == EMPTY)
            .map(|(at, _)| at)
            .collect()
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|&value| value != EMPTY)
    }

    /// True if every cell is empty
    pub fn is_clear(&self) -> bool {
        self.0.iter().flatten().all(|&value| value == EMPTY)
    }

    /// Largest tile value, ignoring empty cells (`EMPTY` for a clear grid)
    pub fn max_tile(&self) -> Tile {
        self.0
            .iter()
            .flatten()
            .copied()
            .filter(|&value| value != EMPTY)
            .max()
            .unwrap_or(EMPTY)
    }

    /// Sum of all cell values
    pub fn tile_sum(&self) -> i128 {
        self.0.iter().flatten().map(|&value| value as i128).sum()
    }
}

impl From<[Row; GRID_SIZE]> for Grid {
    fn from(rows: [Row; GRID_SIZE]) -> Self {
        Self(rows)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if *value == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}
