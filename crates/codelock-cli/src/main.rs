//! Command-line front end for generating code-breaking puzzles.
//!
//! Prints one or more puzzles from a single generator, so secrets never
//! repeat within a run.
//!
//! ```sh
//! codelock --level 3 --digits 4 --hints 6
//! codelock --count 3 --phrase "weekly challenge" --format json
//! RUST_LOG=debug codelock --reveal
//! ```

use std::{
    io::{self, Write as _},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use codelock_generator::{GeneratorError, PuzzleConfig, PuzzleGenerator, PuzzleSeed};

use crate::dto::PuzzleDto;

mod dto;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "codelock", author, version, about)]
struct Args {
    /// Difficulty level (1 or higher).
    #[arg(short, long, value_name = "LEVEL", default_value_t = 1)]
    level: u32,

    /// Number of digits in the secret.
    #[arg(short, long, value_name = "COUNT", default_value_t = 3)]
    digits: usize,

    /// Number of hints per puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    hints: usize,

    /// Number of puzzles to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Seed for the first puzzle, as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive seeds from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Random draws per secret or hint before scanning for a free code.
    #[arg(long, value_name = "COUNT", default_value_t = codelock_generator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Show locked hints and the secret.
    #[arg(long)]
    reveal: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn config(&self) -> PuzzleConfig {
        PuzzleConfig {
            level: self.level,
            digit_count: self.digits,
            hint_count: self.hints,
        }
    }

    /// Returns the seed for the `index`-th puzzle, or `None` for a random one.
    fn seed(&self, index: usize) -> Option<PuzzleSeed> {
        match (&self.seed, &self.phrase) {
            (Some(seed), _) if index == 0 => Some(*seed),
            (Some(seed), _) => Some(PuzzleSeed::from_phrase(&format!("{seed}/{index}"))),
            (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(&format!("{phrase}/{index}"))),
            (None, None) => None,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Generator(#[from] GeneratorError),
    #[display("failed to encode JSON: {_0}")]
    Json(#[from] serde_json::Error),
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.config();
    let mut generator = PuzzleGenerator::new().with_max_attempts(args.max_attempts);

    let mut puzzles = Vec::with_capacity(args.count);
    for index in 0..args.count {
        let puzzle = match args.seed(index) {
            Some(seed) => generator.create_puzzle_with_seed(&config, seed)?,
            None => generator.create_puzzle(&config)?,
        };
        puzzles.push(puzzle);
    }
    log::info!(
        "generated {} puzzle(s), {} secret(s) issued",
        puzzles.len(),
        generator.issued_count()
    );

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            for (index, puzzle) in puzzles.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                render::write_text(&mut out, index + 1, puzzle, args.reveal)?;
            }
        }
        OutputFormat::Json => {
            let dtos: Vec<_> = puzzles.iter().map(PuzzleDto::from).collect();
            serde_json::to_writer_pretty(&mut out, &dtos)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["codelock"]).unwrap();
        assert_eq!(args.config(), PuzzleConfig::default());
        assert_eq!(args.count, 1);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.seed(0), None);
    }

    #[test]
    fn test_args_config() {
        let args =
            Args::try_parse_from(["codelock", "-l", "3", "-d", "4", "--hints", "6"]).unwrap();
        assert_eq!(
            args.config(),
            PuzzleConfig {
                level: 3,
                digit_count: 4,
                hint_count: 6,
            }
        );
    }

    #[test]
    fn test_seed_derivation() {
        let hex = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let args = Args::try_parse_from(["codelock", "--seed", hex]).unwrap();
        let first = args.seed(0).unwrap();
        assert_eq!(first.to_string(), hex);
        assert_ne!(args.seed(1), Some(first));

        let args = Args::try_parse_from(["codelock", "--phrase", "weekly"]).unwrap();
        assert_eq!(args.seed(2), Some(PuzzleSeed::from_phrase("weekly/2")));
    }

    #[test]
    fn test_seed_and_phrase_conflict() {
        let hex = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        assert!(Args::try_parse_from(["codelock", "--seed", hex, "--phrase", "x"]).is_err());
        assert!(Args::try_parse_from(["codelock", "--seed", "nothex"]).is_err());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let args = Args::try_parse_from(["codelock", "--level", "0"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CliError::Generator(GeneratorError::InvalidConfig(_))));
        assert_eq!(
            err.to_string(),
            "invalid puzzle configuration: level must be at least 1"
        );
    }
}
