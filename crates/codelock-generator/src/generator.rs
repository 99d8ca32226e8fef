//! Puzzle assembly and the stateful generator.

use codelock_core::{Code, Digit};
use rand::RngExt;

use crate::{
    GeneratorError, Hint, IssuedSecrets, Level, PuzzleConfig, PuzzleSeed, SecretStore,
    config::{check_digit_count, secret_space_size},
    hint::generate_hints,
    secret::{draw_secret, nth_secret},
};

/// Default number of random draws for one secret or one hint before the
/// generator falls back to scanning the code space.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// A generated code-breaking puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The code the player has to work out.
    pub secret: Code,
    /// Blank input buffer with one slot per secret digit.
    pub user_input: Vec<Option<Digit>>,
    /// Hints in generation order.
    pub hints: Vec<Hint>,
    /// Difficulty level.
    pub level: Level,
    /// Description of the difficulty level.
    pub description: &'static str,
}

impl Puzzle {
    /// Returns the number of digits in the secret.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.secret.len()
    }

    /// Iterates over the hints that start out unlocked.
    pub fn unlocked_hints(&self) -> impl Iterator<Item = &Hint> {
        self.hints.iter().filter(|hint| !hint.is_locked)
    }
}

/// Generator for code-breaking puzzles.
///
/// The generator owns a [`SecretStore`] that remembers every secret it has
/// issued, so no two puzzles created through the same store share a secret.
/// The default store, [`IssuedSecrets`], lives as long as the generator;
/// [`SharedSecrets`](crate::SharedSecrets) lets several generators share one.
///
/// # Examples
///
/// ```
/// use codelock_generator::{PuzzleConfig, PuzzleGenerator};
///
/// let mut generator = PuzzleGenerator::new();
/// let config = PuzzleConfig::default().with_level(3).with_digit_count(4).with_hint_count(6);
///
/// let puzzle = generator.create_puzzle(&config)?;
/// assert_eq!(puzzle.secret.len(), 4);
/// assert_eq!(puzzle.user_input, vec![None; 4]);
/// assert_eq!(puzzle.hints.len(), 6);
/// assert_eq!(puzzle.unlocked_hints().count(), 5);
///
/// let other = generator.create_puzzle(&config)?;
/// assert_ne!(puzzle.secret, other.secret);
/// # Ok::<(), codelock_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<S = IssuedSecrets> {
    store: S,
    max_attempts: usize,
}

impl PuzzleGenerator {
    /// Creates a generator with an empty private store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(IssuedSecrets::new())
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PuzzleGenerator<S>
where
    S: SecretStore,
{
    /// Creates a generator that records issued secrets in `store`.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of random draws for one secret or one hint.
    ///
    /// Once the draws run out the code space is scanned from a random
    /// starting point instead, so the bound only trades randomness for speed
    /// when few codes are left. With a bound of 0 every code is found by
    /// scanning.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the secret store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the number of secrets issued through this generator's store.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.store.issued_count()
    }

    /// Creates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`create_puzzle_with_seed`](Self::create_puzzle_with_seed).
    pub fn create_puzzle(&mut self, config: &PuzzleConfig) -> Result<Puzzle, GeneratorError> {
        self.create_puzzle_with_seed(config, PuzzleSeed::random())
    }

    /// Creates a puzzle whose random draws come from `seed`.
    ///
    /// On a generator with the same store contents, the same seed and
    /// configuration always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidConfig`] if `config` fails
    ///   [`PuzzleConfig::validate`].
    /// - [`GeneratorError::SecretSpaceExhausted`] if every secret of
    ///   `digit_count` digits has already been issued.
    ///
    /// The store is unchanged whenever an error is returned.
    pub fn create_puzzle_with_seed(
        &mut self,
        config: &PuzzleConfig,
        seed: PuzzleSeed,
    ) -> Result<Puzzle, GeneratorError> {
        config.validate()?;
        let level = config.level()?;

        let mut rng = seed.rng();
        let secret = self.generate_secret(&mut rng, config.digit_count)?;
        let hints = match generate_hints(
            &mut rng,
            &secret,
            config.hint_count,
            level,
            self.max_attempts,
        ) {
            Ok(hints) => hints,
            Err(err) => {
                self.store.release(&secret);
                return Err(err);
            }
        };

        log::debug!(
            "created puzzle: seed={seed}, level={level}, digits={}, hints={}",
            config.digit_count,
            hints.len(),
        );

        Ok(Puzzle {
            seed,
            user_input: vec![None; secret.len()],
            secret,
            hints,
            level,
            description: level.description(),
        })
    }

    /// Draws a secret that has not been issued yet and records it as issued.
    ///
    /// Candidates are drawn with [`draw_secret`] up to the attempt bound.
    /// After that the distinct-digit codes are scanned from a random starting
    /// point, so a secret is found whenever one is left.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidConfig`] if `digit_count` is 0 or greater
    ///   than 10.
    /// - [`GeneratorError::SecretSpaceExhausted`] if every secret of
    ///   `digit_count` digits has already been issued.
    pub fn generate_secret<R>(
        &mut self,
        rng: &mut R,
        digit_count: usize,
    ) -> Result<Code, GeneratorError>
    where
        R: RngExt + ?Sized,
    {
        check_digit_count(digit_count)?;
        for _ in 0..self.max_attempts {
            let candidate = draw_secret(rng, digit_count)?;
            if self.store.try_claim(&candidate) {
                return Ok(candidate);
            }
            log::trace!("secret {candidate} already issued");
        }

        let available = secret_space_size(digit_count);
        log::debug!(
            "no unused {digit_count}-digit secret in {} draws, scanning {available} codes",
            self.max_attempts,
        );
        let start = rng.random_range(0..available);
        for index in (start..available).chain(0..start) {
            let Some(candidate) = nth_secret(index, digit_count) else {
                break;
            };
            if self.store.try_claim(&candidate) {
                return Ok(candidate);
            }
        }

        log::warn!(
            "all {available} {digit_count}-digit secrets issued ({} in store)",
            self.store.issued_count(),
        );
        Err(GeneratorError::SecretSpaceExhausted {
            digit_count,
            available,
        })
    }
}
