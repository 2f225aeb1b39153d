use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quickplay::core::tetris::{clear_and_score, Board};
use quickplay::core::{SnakeGame, TetrisGame, TicTacToeGame};
use quickplay::types::{Direction, PieceKind, SnakeInput, TicTacToeInput, BOT_DELAY_MS, TICK_MS};

fn bench_snake_tick(c: &mut Criterion) {
    let mut game = SnakeGame::new(12345);

    c.bench_function("snake_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.reset();
            }
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_snake_step(c: &mut Criterion) {
    c.bench_function("snake_step_until_wall", |b| {
        b.iter(|| {
            let mut game = SnakeGame::new(black_box(7));
            game.apply_input(SnakeInput::Turn(Direction::Down));
            while game.step() {}
        })
    });
}

fn bench_tetris_tick(c: &mut Criterion) {
    let mut game = TetrisGame::new(12345);
    game.start();

    c.bench_function("tetris_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.start();
            }
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.set(0, 15, Some(PieceKind::O));
            black_box(clear_and_score(&mut board));
        })
    });
}

fn bench_tictactoe_round(c: &mut Criterion) {
    c.bench_function("tictactoe_round", |b| {
        b.iter(|| {
            let mut game = TicTacToeGame::new();
            for index in 0..9 {
                game.apply_input(TicTacToeInput::Tap {
                    row: index / 3,
                    col: index % 3,
                });
                game.tick(BOT_DELAY_MS);
            }
            black_box(game.result());
        })
    });
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_snake_step,
    bench_tetris_tick,
    bench_line_clear,
    bench_tictactoe_round
);
criterion_main!(benches);
