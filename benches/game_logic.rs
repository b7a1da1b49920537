use criterion::{black_box, criterion_group, criterion_main, Criterion};

use colorbleed::core::{apply_bleed, completion_percent, GameSession, Grid};
use colorbleed::types::{Difficulty, Level, PaletteColor, BLEED_DISTANCE};

fn bench_level() -> Level {
    Level::with_blank_grid(
        1,
        "Bench",
        Difficulty::Hard,
        vec![PaletteColor::Red, PaletteColor::Blue],
        16,
        1000,
    )
}

fn bench_bleed(c: &mut Criterion) {
    c.bench_function("apply_bleed_center", |b| {
        b.iter(|| {
            let mut grid = Grid::new(16);
            apply_bleed(&mut grid, black_box(8), black_box(8), 0, BLEED_DISTANCE)
        })
    });
}

fn bench_completion(c: &mut Criterion) {
    let mut grid = Grid::new(16);
    apply_bleed(&mut grid, 8, 8, 0, BLEED_DISTANCE);

    c.bench_function("completion_percent", |b| {
        b.iter(|| completion_percent(black_box(&grid)))
    });
}

fn bench_tap(c: &mut Criterion) {
    let mut session = GameSession::new(bench_level()).expect("valid bench level");

    c.bench_function("tap_and_reload", |b| {
        b.iter(|| {
            session.reload();
            session.tap_cell(black_box(8), black_box(8))
        })
    });
}

fn bench_rejected_tap(c: &mut Criterion) {
    let mut session = GameSession::new(bench_level()).expect("valid bench level");
    session.tap_cell(8, 8);

    c.bench_function("tap_already_colored", |b| {
        b.iter(|| session.tap_cell(black_box(8), black_box(8)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new(bench_level()).expect("valid bench level");
    session.tap_cell(8, 8);
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_bleed,
    bench_completion,
    bench_tap,
    bench_rejected_tap,
    bench_snapshot
);
criterion_main!(benches);
