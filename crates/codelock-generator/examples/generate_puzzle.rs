//! Example demonstrating puzzle generation, single and in parallel.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` and generate a puzzle
//! - Replay a puzzle from its seed
//! - Generate many puzzles in parallel with one generator per worker, all
//!   sharing a `SharedSecrets` store so that no secret repeats
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the level, code length and number of hints:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level 4 --digits 4 --hints 8
//! ```
//!
//! Replay a puzzle from a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Generate a batch in parallel and report how many distinct secrets it has:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --batch 500
//! ```

use std::{collections::HashSet, process};

use clap::Parser;
use codelock_generator::{
    GeneratorError, Puzzle, PuzzleConfig, PuzzleGenerator, PuzzleSeed, SecretStore as _,
    SharedSecrets,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level (1 or higher).
    #[arg(long, value_name = "LEVEL", default_value_t = 1)]
    level: u32,

    /// Number of digits in the secret.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    digits: usize,

    /// Number of hints.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    hints: usize,

    /// Seed to replay, as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "batch")]
    seed: Option<PuzzleSeed>,

    /// Generate this many puzzles in parallel instead of printing one.
    #[arg(long, value_name = "COUNT")]
    batch: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let config = PuzzleConfig {
        level: args.level,
        digit_count: args.digits,
        hint_count: args.hints,
    };

    if let Some(count) = args.batch {
        run_batch(&config, count);
        return;
    }

    let mut generator = PuzzleGenerator::new();
    let result = match args.seed {
        Some(seed) => generator.create_puzzle_with_seed(&config, seed),
        None => generator.create_puzzle(&config),
    };
    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("Failed to generate puzzle: {err}");
            process::exit(1);
        }
    }
}

fn run_batch(config: &PuzzleConfig, count: usize) {
    let store = SharedSecrets::new();

    let results = (0..count)
        .into_par_iter()
        .map_init(
            || PuzzleGenerator::with_store(store.clone()),
            |generator, _| generator.create_puzzle(config),
        )
        .collect::<Result<Vec<_>, GeneratorError>>();

    let puzzles = match results {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("Batch stopped: {err}");
            eprintln!("Secrets issued before stopping: {}", store.issued_count());
            process::exit(1);
        }
    };

    let distinct = puzzles
        .iter()
        .map(|puzzle| &puzzle.secret)
        .collect::<HashSet<_>>()
        .len();
    println!("Puzzles: {}", puzzles.len());
    println!("Distinct secrets: {distinct}");
    println!("Issued secrets: {}", store.issued_count());
}

fn print_puzzle(puzzle: &Puzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Level {}:", puzzle.level);
    println!("  {}", puzzle.description);
    println!();

    println!("Hints:");
    for hint in &puzzle.hints {
        let lock = if hint.is_locked { "locked" } else { "" };
        println!("  {}  {:<55} {lock}", hint.code, hint.message);
    }
    println!();

    println!("Secret:");
    println!("  {}", puzzle.secret);
}
