use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameSnapshot, GameState, GridConfig};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::Phase;

fn bench_step(c: &mut Criterion) {
    let mut game = GameState::new(GridConfig::new(30, 20), 12345);
    game.start();

    c.bench_function("step_advance", |b| {
        b.iter(|| {
            if game.phase() == Phase::GameOver {
                game.new_game();
                game.start();
            }
            black_box(game.step());
        })
    });
}

fn bench_new_game(c: &mut Criterion) {
    let mut game = GameState::new(GridConfig::new(30, 20), 12345);

    c.bench_function("new_game", |b| {
        b.iter(|| {
            game.new_game();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut game = GameState::new(GridConfig::new(30, 20), 12345);
    game.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let game = GameState::new(GridConfig::new(30, 20), 12345);
    let snap = game.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_new_game,
    bench_snapshot_into,
    bench_render_into
);
criterion_main!(benches);
