//! Benchmarks for level shuffling.
//!
//! - **`shuffle_full`**: Shuffles a fully tiled 9x9 level, including the
//!   legal-swap detection that accepts or rejects each attempt.
//! - **`shuffle_holes`**: Shuffles a 9x9 level with unplayable cells in the
//!   middle, which shortens runs and makes legal swaps rarer.
//! - **`detect_possible_swaps`**: Recomputes the legal-swap set of an already
//!   shuffled 9x9 level.
//!
//! Uses fixed seeds so that every run measures the same layouts.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffle
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crunch_layout::TileLayout;
use crunch_level::{Level, LevelConfig, LevelSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const HOLES: &str = "
    111111111
    111111111
    110111011
    111000111
    110000011
    111000111
    110111011
    111111111
    111111111
";

fn bench_shuffle(c: &mut Criterion, name: &str, layout: &TileLayout) {
    let level = Level::new(LevelConfig::default(), layout).unwrap();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = LevelSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || (level.clone(), hint::black_box(*seed)),
                    |(mut level, seed)| level.shuffle_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_shuffle_full(c: &mut Criterion) {
    bench_shuffle(c, "shuffle_full", &TileLayout::filled(9, 9));
}

fn bench_shuffle_holes(c: &mut Criterion) {
    bench_shuffle(c, "shuffle_holes", &HOLES.parse().unwrap());
}

fn bench_detect_possible_swaps(c: &mut Criterion) {
    let mut level = Level::new(LevelConfig::default(), &TileLayout::filled(9, 9)).unwrap();
    level
        .shuffle_with_seed(LevelSeed::from_str(SEEDS[0]).unwrap())
        .unwrap();
    c.bench_function("detect_possible_swaps", |b| {
        b.iter(|| hint::black_box(level.detect_possible_swaps().len()));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets =
        bench_shuffle_full,
        bench_shuffle_holes,
        bench_detect_possible_swaps
);
criterion_main!(benches);
