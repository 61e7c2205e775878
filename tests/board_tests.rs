//! Board tests - row primitives, reorientation and directional pushes

use twofortyeight::core::{
    combine, find_max_edge_tile, flip, rotate, slide, slide_and_combine, Engine, EngineConfig,
    MergeTally, ReductionRule,
};
use twofortyeight::types::{Coord, Direction, Grid, GridError, GRID_SIZE};

fn fixture() -> Grid {
    Grid::new([[2, 0, 2, 4], [0, 0, 0, 0], [2, 0, 0, 4], [-2, 0, 0, 8]])
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::empty();
    assert_eq!(grid.rows().len(), GRID_SIZE);
    assert!(grid.rows().iter().all(|row| row.len() == GRID_SIZE));
    assert_eq!(grid.empty_cells().len(), GRID_SIZE * GRID_SIZE);
    assert!(grid.is_clear());
}

#[test]
fn test_grid_from_rows_shape_violation_is_an_error() {
    let err = Grid::from_rows(vec![vec![0; 5]; 4]).unwrap_err();
    assert_eq!(
        err,
        GridError::RowLength {
            row: 0,
            expected: 4,
            actual: 5
        }
    );
    assert_eq!(err.to_string(), "row 0 has 5 cells, expected 4");

    let err = Grid::from_rows(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "expected 4 rows, got 0");
}

#[test]
fn test_combine_golden_fixture() {
    // Simulated by hand: (3,2) fuse to 4, then (2,1)=(0,2) and (1,0)=(2,0) do not.
    let mut tally = MergeTally::new();
    assert_eq!(combine([0, 2, 2, 2], &mut tally), [0, 2, 0, 4]);
    assert_eq!(tally.points, 4);

    let mut tally = MergeTally::new();
    assert_eq!(slide_and_combine([0, 2, 2, 2], &mut tally), [0, 0, 2, 4]);
    assert_eq!(tally.points, 4);
}

#[test]
fn test_slide_keeps_order() {
    assert_eq!(slide([4, 0, -2, 0]), [0, 0, 4, -2]);
    assert_eq!(slide(slide([4, 0, -2, 0])), slide([4, 0, -2, 0]));
}

#[test]
fn test_flip_and_rotate_are_involutions() {
    let grid = fixture();
    assert_eq!(flip(flip(grid)), grid);
    assert_eq!(rotate(rotate(grid)), grid);
    assert_ne!(flip(grid), grid);
    assert_ne!(rotate(grid), grid);
}

#[test]
fn test_push_right() {
    let out = Engine::default().push(fixture(), Direction::Right);
    assert_eq!(
        out.grid,
        Grid::new([[0, 0, 4, 4], [0; 4], [0, 0, 2, 4], [0, 0, -2, 8]])
    );
    assert_eq!(out.score, 4);
    assert!(!out.reduced);
}

#[test]
fn test_push_left() {
    let out = Engine::default().push(fixture(), Direction::Left);
    assert_eq!(
        out.grid,
        Grid::new([[4, 4, 0, 0], [0; 4], [2, 4, 0, 0], [-2, 8, 0, 0]])
    );
    assert_eq!(out.score, 4);
}

#[test]
fn test_push_up() {
    let out = Engine::default().push(fixture(), Direction::Up);
    assert_eq!(
        out.grid,
        Grid::new([[4, 0, 2, 8], [-2, 0, 0, 8], [0; 4], [0; 4]])
    );
    assert_eq!(out.score, 12);
    assert!(!out.reduced);
}

#[test]
fn test_push_down_cancels_opposite_pair() {
    let out = Engine::default().push(fixture(), Direction::Down);
    assert_eq!(
        out.grid,
        Grid::new([[0; 4], [0; 4], [0, 0, 0, 8], [2, 0, 2, 8]])
    );
    assert_eq!(out.score, 8);
    assert!(out.reduced);
    assert_eq!(out.halved, None);
}

#[test]
fn test_push_down_with_halving_rule() {
    let engine = Engine::new(EngineConfig::new(ReductionRule::HalveMaxEdge));
    let out = engine.push(fixture(), Direction::Down);
    assert_eq!(
        out.grid,
        Grid::new([[0; 4], [0; 4], [0, 0, 0, 4], [2, 0, 2, 8]])
    );
    assert_eq!(out.halved, Some(Coord::new(2, 3)));
    assert_eq!(out.score, 8);
}

#[test]
fn test_edge_tile_tie_break() {
    let grid = Grid::new([[0; 4], [4, 4, 2, 4], [2, 0, 0, 0], [0; 4]]);
    assert_eq!(find_max_edge_tile(grid), Some(Coord::new(1, 3)));
}
