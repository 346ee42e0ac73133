use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mono_core::{SimConfig, StreamRng};
use mono_sim::{GameSimulator, NoopObserver, RunnerBuilder, Tally};

fn bench_single_game(c: &mut Criterion) {
    let mut rng = StreamRng::new(42, 0);
    let mut game = GameSimulator::new(40);
    let mut tally = Tally::new();
    c.bench_function("play_game_40_moves", |b| {
        b.iter(|| game.play_game(black_box(&mut rng), black_box(&mut tally)))
    });
}

fn bench_run_10k(c: &mut Criterion) {
    let runner = RunnerBuilder::new(SimConfig::default())
        .games(10_000)
        .chunk_games(1_000)
        .build()
        .unwrap();
    c.bench_function("run_10k_games", |b| {
        b.iter(|| runner.run(black_box(&mut NoopObserver)).unwrap())
    });
}

criterion_group!(benches, bench_single_game, bench_run_10k);
criterion_main!(benches);
