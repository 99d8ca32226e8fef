//! Error types for puzzle generation.

use codelock_core::ParseCodeError;

/// A [`PuzzleConfig`](crate::PuzzleConfig) value that cannot produce a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// Levels start at 1.
    #[display("level must be at least 1")]
    ZeroLevel,
    /// The digit count is zero or longer than a code can be.
    #[display("invalid digit count: {_0}")]
    InvalidDigitCount(#[from] ParseCodeError),
    /// More hints were requested than there are distinct codes of that length.
    #[display("{hint_count} hints requested, but only {available} distinct codes exist")]
    TooManyHints {
        /// Requested number of hints.
        hint_count: usize,
        /// Number of distinct codes of the configured length.
        available: usize,
    },
}

/// Errors that can occur while creating a puzzle.
///
/// Generation never returns a partial puzzle: on any error the generator's
/// secret store is left as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GeneratorError {
    /// The configuration was rejected before anything was generated.
    #[display("invalid puzzle configuration: {_0}")]
    #[from]
    InvalidConfig(ConfigError),
    /// Every secret of the configured length has already been issued.
    #[display("all {available} secrets of {digit_count} distinct digits have been issued")]
    SecretSpaceExhausted {
        /// Configured code length.
        digit_count: usize,
        /// Number of distinct-digit codes of that length.
        available: usize,
    },
    /// More hints were requested than there are distinct codes of that length.
    #[display("{hint_count} hints requested, but only {available} distinct codes exist")]
    HintSpaceExhausted {
        /// Requested number of hints.
        hint_count: usize,
        /// Number of distinct codes of the secret's length.
        available: usize,
    },
}
