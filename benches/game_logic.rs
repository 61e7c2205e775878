use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twofortyeight::core::{add_random_tile, is_game_over, Engine, GameState, SimpleRng};
use twofortyeight::types::{Direction, Grid};

fn busy_grid() -> Grid {
    Grid::new([[2, 2, 4, 8], [0, 4, 4, 16], [-2, 2, 0, 32], [8, 8, 16, 64]])
}

fn bench_push(c: &mut Criterion) {
    let engine = Engine::default();
    let grid = busy_grid();

    for dir in Direction::ALL {
        c.bench_function(&format!("push_{}", dir.as_str()), |b| {
            b.iter(|| engine.push(black_box(grid), dir))
        });
    }
}

fn bench_add_random_tile(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let grid = busy_grid();

    c.bench_function("add_random_tile", |b| {
        b.iter(|| add_random_tile(black_box(grid), &mut rng))
    });
}

fn bench_game_over(c: &mut Criterion) {
    let stuck = Grid::new([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

    c.bench_function("is_game_over_full", |b| {
        b.iter(|| is_game_over(black_box(stuck)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut i = 0usize;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let _ = state.apply_move(Direction::ALL[i % 4]);
            i += 1;
            if state.game_over() {
                state.start();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_add_random_tile,
    bench_game_over,
    bench_apply_move
);
criterion_main!(benches);
