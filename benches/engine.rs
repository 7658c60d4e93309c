use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, SHAPE_TABLE};
use blockfall::engine::{EventDispatcher, Marathon, PieceController};
use blockfall::types::{Color, GameCommand, ShapeType};

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let props = SHAPE_TABLE.props(ShapeType::T, 0);

    c.bench_function("board_collides", |b| {
        b.iter(|| board.collides(black_box(props), black_box(4), black_box(10)))
    });
}

fn bench_clear_four_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let rows = board.rows();
            for row in rows - 4..rows {
                for col in 0..board.columns() {
                    board.set(row, col, Some(Color::CYAN));
                }
            }
            board.set(rows - 5, 0, Some(Color::RED));
            board.clear_lines()
        })
    });
}

fn bench_spawn_block(c: &mut Criterion) {
    let board = Board::new();
    let events = EventDispatcher::new();
    let mut controller = PieceController::new(12345);

    c.bench_function("spawn_block", |b| {
        b.iter(|| controller.spawn_block(&board, &events))
    });
}

fn bench_gravity_tick(c: &mut Criterion) {
    let mut game = Marathon::new(12345);
    game.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| game.gravity_tick().expect("tick"))
    });
}

fn bench_command_round(c: &mut Criterion) {
    let mut game = Marathon::new(12345);
    game.start();

    c.bench_function("move_rotate_commands", |b| {
        b.iter(|| {
            game.handle(GameCommand::MoveLeft);
            game.handle(GameCommand::RotateCw);
            game.handle(GameCommand::MoveRight);
            game.handle(GameCommand::RotateCcw);
        })
    });
}

criterion_group!(
    benches,
    bench_collides,
    bench_clear_four_lines,
    bench_spawn_block,
    bench_gravity_tick,
    bench_command_round
);
criterion_main!(benches);
