//! Board module - row and grid primitives
//!
//! Every directional push is built from four small pure functions:
//!
//! - [`slide`]: drop empty cells, pack tiles towards the high index (right)
//! - [`combine`]: single right-to-left merge pass over one row
//! - [`flip`]: mirror every row left-right
//! - [`rotate`]: transpose across the main diagonal
//!
//! `slide` + `combine` + `slide` is a push towards the right edge. The other
//! three directions reorient the grid with `flip`/`rotate` first, push right,
//! then undo the reorientation (see `engine`).
//!
//! All functions take and return values. Nothing here allocates.

use crate::scoring::MergeTally;
use crate::types::{Grid, Row, EMPTY, GRID_SIZE};

/// Remove empty cells and left-pad with zeros, keeping tile order
///
/// Net effect: tiles gravitate to the right end of the row.
pub fn slide(row: Row) -> Row {
    let mut out = [EMPTY; GRID_SIZE];
    let mut write = GRID_SIZE;

    for &value in row.iter().rev() {
        if value != EMPTY {
            write -= 1;
            out[write] = value;
        }
    }

    out
}

/// One merge pass from the rightmost pair down to the leftmost
///
/// For each column `c` in `N-1..=1` the pair `(row[c], row[c-1])` is checked
/// against the row as mutated so far:
/// - equal values fuse into `row[c]`, `row[c-1]` becomes empty and the sum is
///   credited to `tally`
/// - mutually negated values fuse the same way (their sum is zero) and flag a
///   reduction without scoring
///
/// There is no re-scan. A fused cell at `c` is never visited again as the
/// right-hand side of a pair.
///
/// Sums clamp at `Tile::MAX` / `Tile::MIN`. `Tile::MIN` has no negation, so it
/// only ever fuses with an equal tile.
pub fn combine(row: Row, tally: &mut MergeTally) -> Row {
    let mut row = row;

    for col in (1..GRID_SIZE).rev() {
        let current = row[col];
        let prev = row[col - 1];

        if current == prev {
            let sum = current.saturating_add(prev);
            row[col] = sum;
            row[col - 1] = EMPTY;
            tally.record_merge(sum);
        } else if prev.checked_neg() == Some(current) {
            row[col] = EMPTY;
            row[col - 1] = EMPTY;
            tally.record_reduction();
        }
    }

    row
}

/// Push one row to the right: slide, combine, slide again
///
/// The second slide closes the gaps left by emptied merge partners.
pub fn slide_and_combine(row: Row, tally: &mut MergeTally) -> Row {
    let row = slide(row);
    let row = combine(row, tally);
    slide(row)
}

/// Apply [`slide_and_combine`] to every row of the grid
pub fn operate_rows(grid: Grid, tally: &mut MergeTally) -> Grid {
    let mut rows = grid.into_rows();
    for row in rows.iter_mut() {
        *row = slide_and_combine(*row, tally);
    }
    Grid::new(rows)
}

/// Mirror every row left-right
pub fn flip(grid: Grid) -> Grid {
    let mut rows = grid.into_rows();
    for row in rows.iter_mut() {
        row.reverse();
    }
    Grid::new(rows)
}

/// Transpose: `new[r][c] = old[c][r]`
pub fn rotate(grid: Grid) -> Grid {
    let old = grid.rows();
    let mut out = [[EMPTY; GRID_SIZE]; GRID_SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = old[c][r];
        }
    }
    Grid::new(out)
}
