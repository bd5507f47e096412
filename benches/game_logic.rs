use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::types::{GameAction, PieceKind};

fn bench_soft_drop(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            black_box(state.soft_drop());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn_piece());
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    let mut delta = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(black_box(delta)) {
                delta = -delta;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.apply_action(GameAction::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_seed(12345);
    let mut snap = state.render_state();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_soft_drop,
    bench_line_clear,
    bench_piece_spawn,
    bench_move_piece,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
