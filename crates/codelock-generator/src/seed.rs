//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines the random draws of one puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters.
///
/// Replaying a seed reproduces the same puzzle only on a generator whose
/// secret store has the same contents, since already issued secrets are
/// skipped.
///
/// # Examples
///
/// ```
/// use codelock_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2026-10-18");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, parsed);
/// # Ok::<(), codelock_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Errors that can occur when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected string, in characters.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex character {ch:?} at index {index}")]
    InvalidHex {
        /// Character index of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from a free-form phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random generator seeded by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut nibbles = [0_u8; 64];
        for (index, ch) in s.chars().enumerate() {
            nibbles[index] = ch
                .to_digit(16)
                .and_then(|value| u8::try_from(value).ok())
                .ok_or(ParseSeedError::InvalidHex { index, ch })?;
        }

        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
