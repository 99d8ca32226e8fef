//! Puzzle configuration.

use codelock_core::{Code, Digit, ParseCodeError};

use crate::{ConfigError, Level};

/// Options for a single [`create_puzzle`](crate::PuzzleGenerator::create_puzzle) call.
///
/// # Examples
///
/// ```
/// use codelock_generator::PuzzleConfig;
///
/// let config = PuzzleConfig::default().with_level(3).with_digit_count(4);
/// assert_eq!(config.level, 3);
/// assert_eq!(config.digit_count, 4);
/// assert_eq!(config.hint_count, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleConfig {
    /// Difficulty level, starting at 1.
    pub level: u32,
    /// Number of digits in the secret and in each hint code.
    pub digit_count: usize,
    /// Number of hints to generate.
    pub hint_count: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            level: 1,
            digit_count: 3,
            hint_count: 5,
        }
    }
}

impl PuzzleConfig {
    /// Returns this configuration with `level` replaced.
    #[must_use]
    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Returns this configuration with `digit_count` replaced.
    #[must_use]
    pub const fn with_digit_count(mut self, digit_count: usize) -> Self {
        self.digit_count = digit_count;
        self
    }

    /// Returns this configuration with `hint_count` replaced.
    #[must_use]
    pub const fn with_hint_count(mut self, hint_count: usize) -> Self {
        self.hint_count = hint_count;
        self
    }

    /// Returns the validated level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLevel`] if `level` is 0.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::new(self.level)
    }

    /// Checks that a puzzle can be generated from this configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroLevel`] if `level` is 0.
    /// - [`ConfigError::InvalidDigitCount`] if `digit_count` is 0 or exceeds
    ///   [`Code::MAX_LEN`], the most distinct digits a secret can hold.
    /// - [`ConfigError::TooManyHints`] if `hint_count` exceeds the number of
    ///   distinct codes of length `digit_count`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level()?;
        check_digit_count(self.digit_count)?;
        if let Some(available) =
            code_space_size(self.digit_count).filter(|&available| self.hint_count > available)
        {
            return Err(ConfigError::TooManyHints {
                hint_count: self.hint_count,
                available,
            });
        }
        Ok(())
    }
}

/// Rejects lengths that no distinct-digit code can have.
pub(crate) fn check_digit_count(digit_count: usize) -> Result<(), ConfigError> {
    if digit_count == 0 {
        return Err(ParseCodeError::Empty.into());
    }
    if digit_count > Code::MAX_LEN {
        return Err(ParseCodeError::TooLong {
            len: digit_count,
            max: Code::MAX_LEN,
        }
        .into());
    }
    Ok(())
}

/// Number of codes of length `digit_count` when digits may repeat.
///
/// Returns `None` if the count does not fit in `usize`.
pub(crate) fn code_space_size(digit_count: usize) -> Option<usize> {
    let exp = u32::try_from(digit_count).ok()?;
    10_usize.checked_pow(exp)
}

/// Number of codes of length `digit_count` with pairwise distinct digits.
pub(crate) fn secret_space_size(digit_count: usize) -> usize {
    (0..digit_count.min(Digit::COUNT))
        .map(|used| Digit::COUNT - used)
        .product()
}
