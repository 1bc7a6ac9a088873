use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dropshot::core::{score_for, GameState};
use tui_dropshot::term::{GameView, Viewport};

fn bench_swing_tick(c: &mut Criterion) {
    let mut state = GameState::new();
    state.start();

    c.bench_function("swing_tick", |b| {
        b.iter(|| {
            state.tick();
            black_box(state.ball_x());
        })
    });
}

fn bench_fall_tick(c: &mut Criterion) {
    c.bench_function("fall_tick", |b| {
        let mut state = GameState::new();
        state.drop_ball();
        b.iter(|| {
            if state.game_over() {
                state.reset();
                state.drop_ball();
            }
            state.tick();
            black_box(state.ball_y());
        })
    });
}

fn bench_score_for(c: &mut Criterion) {
    c.bench_function("score_for", |b| {
        b.iter(|| {
            for x in 40..60 {
                black_box(score_for(black_box(x as f32)));
            }
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let state = GameState::new();
    let view = GameView::default();
    let snap = state.snapshot();

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            black_box(view.render(&snap, black_box(100), Viewport::new(80, 24)));
        })
    });
}

criterion_group!(
    benches,
    bench_swing_tick,
    bench_fall_tick,
    bench_score_for,
    bench_render_frame
);
criterion_main!(benches);
