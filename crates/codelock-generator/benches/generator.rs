//! Benchmarks for code-breaking puzzle generation.
//!
//! # Benchmarks
//!
//! - **`create_puzzle_default`**: Default configuration (level 1, 3 digits,
//!   5 hints) on a fresh generator.
//! - **`create_puzzle_large`**: Level 5, 6 digits, 40 hints. Hint batches this
//!   size see more duplicate candidates.
//! - **`create_puzzle_crowded`**: Default configuration on a generator whose
//!   store already holds most 3-digit secrets, so secret draws are retried.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use codelock_generator::{PuzzleConfig, PuzzleGenerator, PuzzleSeed};
use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_config(c: &mut Criterion, name: &str, config: PuzzleConfig) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || (PuzzleGenerator::new(), hint::black_box(*seed)),
                    |(mut generator, seed)| generator.create_puzzle_with_seed(&config, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_create_puzzle_default(c: &mut Criterion) {
    bench_config(c, "create_puzzle_default", PuzzleConfig::default());
}

fn bench_create_puzzle_large(c: &mut Criterion) {
    let config = PuzzleConfig::default()
        .with_level(5)
        .with_digit_count(6)
        .with_hint_count(40);
    bench_config(c, "create_puzzle_large", config);
}

fn bench_create_puzzle_crowded(c: &mut Criterion) {
    let config = PuzzleConfig::default();
    let mut crowded = PuzzleGenerator::new();
    for i in 0..600 {
        crowded
            .create_puzzle_with_seed(&config, PuzzleSeed::from_phrase(&i.to_string()))
            .unwrap();
    }

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("create_puzzle_crowded", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || (crowded.clone(), hint::black_box(*seed)),
                    |(mut generator, seed)| generator.create_puzzle_with_seed(&config, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_create_puzzle_default,
        bench_create_puzzle_large,
        bench_create_puzzle_crowded
);
criterion_main!(benches);
