//! Property tests for the push/spawn transition rules.
//!
//! Invariants covered:
//! - `slide` is idempotent.
//! - `flip` and `rotate` are involutions.
//! - Vertical pushes are the horizontal ones seen through `rotate`.
//! - Without the halving rule no tile value is created or destroyed.
//! - `changed` agrees with grid equality.
//! - `is_game_over` holds exactly when no direction moves a non-empty grid.
//! - A spawn fills exactly one empty cell with 2, -2 or -4.

use proptest::prelude::*;
use twofortyeight::core::{
    add_random_tile, flip, is_game_over, rotate, slide, Engine, EngineConfig, ReductionRule,
    SimpleRng,
};
use twofortyeight::types::{Direction, Grid, Row, Tile};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        4 => Just(0),
        2 => Just(2),
        2 => Just(4),
        1 => Just(8),
        1 => Just(16),
        1 => Just(-2),
        1 => Just(-4),
    ]
}

fn positive_tile() -> impl Strategy<Value = Tile> {
    prop_oneof![Just(2), Just(4), Just(8), Just(16), Just(32)]
}

fn row() -> impl Strategy<Value = Row> {
    prop::array::uniform4(tile())
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(row()).prop_map(Grid::new)
}

fn full_positive_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(positive_tile())).prop_map(Grid::new)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn adjacent_pairs_all_unequal(grid: &Grid) -> bool {
    let rows = grid.rows();
    for r in 0..4 {
        for c in 0..4 {
            if c + 1 < 4 && rows[r][c] == rows[r][c + 1] {
                return false;
            }
            if r + 1 < 4 && rows[r][c] == rows[r + 1][c] {
                return false;
            }
        }
    }
    true
}

proptest! {
    #[test]
    fn slide_is_idempotent(r in row()) {
        prop_assert_eq!(slide(slide(r)), slide(r));
    }

    #[test]
    fn flip_and_rotate_are_involutions(g in grid()) {
        prop_assert_eq!(flip(flip(g)), g);
        prop_assert_eq!(rotate(rotate(g)), g);
    }

    #[test]
    fn vertical_pushes_are_rotated_horizontal_pushes(g in grid()) {
        let engine = Engine::default();
        let up = engine.push(g, Direction::Up);
        let left = engine.push(rotate(g), Direction::Left);
        prop_assert_eq!(up.grid, rotate(left.grid));
        prop_assert_eq!(up.score, left.score);

        let down = engine.push(g, Direction::Down);
        let right = engine.push(rotate(g), Direction::Right);
        prop_assert_eq!(down.grid, rotate(right.grid));
        prop_assert_eq!(down.score, right.score);
    }

    #[test]
    fn push_conserves_tile_sum(g in grid(), d in direction()) {
        let out = Engine::default().push(g, d);
        prop_assert_eq!(out.grid.tile_sum(), g.tile_sum());
        prop_assert_eq!(out.halved, None);
    }

    #[test]
    fn changed_flag_matches_grid_equality(g in grid(), d in direction()) {
        let engine = Engine::new(EngineConfig::new(ReductionRule::HalveMaxEdge));
        let out = engine.push(g, d);
        prop_assert_eq!(out.changed, out.grid != g);
        if !out.changed {
            prop_assert!(!engine.can_move(g, d));
            prop_assert_eq!(out.score, 0);
        }
    }

    #[test]
    fn positive_merges_score_what_they_create(g in full_positive_grid(), d in direction()) {
        let out = Engine::default().push(g, d);
        // Each merge removes one tile and scores the value it creates.
        let tiles_before = g.cells().filter(|&(_, v)| v != 0).count();
        let tiles_after = out.grid.cells().filter(|&(_, v)| v != 0).count();
        prop_assert!(tiles_after <= tiles_before);
        prop_assert_eq!(out.score == 0, tiles_after == tiles_before);
    }

    #[test]
    fn game_over_iff_no_direction_moves(g in grid()) {
        let engine = Engine::default();
        let stuck = engine.legal_directions(g).count() == 0;
        prop_assert_eq!(is_game_over(g), stuck && !g.is_clear());
    }

    #[test]
    fn game_over_on_positive_grids_is_unequal_neighbours(g in full_positive_grid()) {
        prop_assert_eq!(is_game_over(g), adjacent_pairs_all_unequal(&g));
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell(g in grid(), seed in any::<u32>()) {
        let mut rng = SimpleRng::new(seed);
        let out = add_random_tile(g, &mut rng);

        let diffs: Vec<_> = g
            .cells()
            .zip(out.grid.cells())
            .filter(|((_, a), (_, b))| a != b)
            .collect();

        match out.spawned {
            None => {
                prop_assert!(g.is_full());
                prop_assert!(diffs.is_empty());
            }
            Some(at) => {
                prop_assert_eq!(diffs.len(), 1);
                let ((coord, before), (_, after)) = diffs[0];
                prop_assert_eq!(coord, at);
                prop_assert_eq!(before, 0);
                prop_assert!([2, -2, -4].contains(&after));
            }
        }
    }
}
