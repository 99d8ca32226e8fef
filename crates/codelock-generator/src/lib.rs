//! Code-breaking puzzle generation.
//!
//! This crate creates puzzles made of a secret digit code and a batch of hint
//! codes, each annotated with feedback on how it compares to the secret.
//!
//! # Overview
//!
//! Generation proceeds in three steps:
//!
//! 1. **Secret**: a code of distinct digits is drawn and checked against the
//!    generator's [`SecretStore`]; already issued secrets are redrawn, so no
//!    two puzzles from one store share a secret.
//! 2. **Hints**: codes of the same length are drawn with repeated digits
//!    allowed, compared against the secret, and collected until the requested
//!    number of distinct, informative hints exists. The last
//!    `floor(level / 2)` hints start out locked.
//! 3. **Assembly**: the secret, hints, a blank input buffer and the level
//!    description form a [`Puzzle`].
//!
//! All random draws come from a [`PuzzleSeed`], so a puzzle can be replayed
//! on a generator with the same store contents.
//!
//! Every retry loop is bounded. A configuration whose code space is used up
//! fails with a [`GeneratorError`] instead of looping forever.
//!
//! # Examples
//!
//! ```
//! use codelock_generator::{PuzzleConfig, PuzzleGenerator};
//!
//! let mut generator = PuzzleGenerator::new();
//! let puzzle = generator.create_puzzle(&PuzzleConfig::default())?;
//!
//! println!("{}", puzzle.description);
//! for hint in puzzle.unlocked_hints() {
//!     println!("{}  {}", hint.code, hint.message);
//! }
//! # Ok::<(), codelock_generator::GeneratorError>(())
//! ```

pub use self::{
    config::PuzzleConfig,
    error::{ConfigError, GeneratorError},
    generator::{DEFAULT_MAX_ATTEMPTS, Puzzle, PuzzleGenerator},
    hint::Hint,
    level::{LEVEL_DESCRIPTIONS, Level, level_description},
    secret::{IssuedSecrets, SecretStore, SharedSecrets},
    seed::{ParseSeedError, PuzzleSeed},
};

mod config;
mod error;
mod generator;
pub mod hint;
mod level;
pub mod secret;
mod seed;
