use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termtris::core::{Board, GameState};
use termtris::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut now: u64 = 0;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if !state.is_running() {
                state.restart();
            }
            state.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.set(3, 15, Some(PieceKind::T));
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn_piece());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut left = false;

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            left = !left;
            if left {
                black_box(state.move_left());
            } else {
                black_box(state.move_right());
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            black_box(state.snapshot());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_hard_drop_game
);
criterion_main!(benches);
