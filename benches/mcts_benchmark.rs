#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use nogo_mcts::{nogo::NoGoBoard, GameState, MCTSConfig, MCTS};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::time::Duration;

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.measurement_time(Duration::from_secs(10));

    // Test different board sizes
    for size in [5, 7, 9].iter() {
        let initial_state = NoGoBoard::new(*size, *size).unwrap();
        let config = MCTSConfig::default().with_max_iterations(200);

        group.bench_with_input(BenchmarkId::new("board_size", size), size, |b, &_| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            b.iter(|| {
                let mut mcts = MCTS::new(initial_state.clone(), config.clone());
                black_box(mcts.search(&mut rng))
            })
        });
    }

    // Test different iteration counts
    let iterations = [100, 500, 2000];
    for &iter_count in &iterations {
        let initial_state = NoGoBoard::standard();
        let config = MCTSConfig::default().with_max_iterations(iter_count);

        group.bench_with_input(
            BenchmarkId::new("iterations", iter_count),
            &iter_count,
            |b, &_| {
                let mut rng = ChaCha20Rng::seed_from_u64(2);
                b.iter(|| {
                    let mut mcts = MCTS::new(initial_state.clone(), config.clone());
                    black_box(mcts.search(&mut rng))
                })
            },
        );
    }

    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let board = NoGoBoard::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    c.bench_function("random_playout_9x9", |b| {
        b.iter(|| black_box(board.random_playout(&mut rng)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    // A mid-game position with a mix of legal and illegal points
    let board = NoGoBoard::from_rows(
        &[
            ".X.O.....",
            "X.XO.O...",
            ".X.OO....",
            ".........",
            "...X.X...",
            "....X....",
            ".O.......",
            "O.O......",
            ".O.....X.",
        ],
        nogo_mcts::PlayerId::First,
    )
    .unwrap();

    c.bench_function("legal_move_count_9x9", |b| {
        b.iter(|| black_box(board.legal_move_count()))
    });
}

criterion_group!(benches, bench_mcts_search, bench_random_playout, bench_legal_moves);
criterion_main!(benches);
