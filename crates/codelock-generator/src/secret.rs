//! Secret drawing and issued-secret tracking.
//!
//! Drawing a secret ([`draw_secret`]) is a pure function of the random
//! generator. Uniqueness across puzzles is tracked separately by a
//! [`SecretStore`] owned by the generator, so tests can use isolated stores
//! and several generators can share one.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use codelock_core::{Code, DigitSet};
use rand::RngExt;

use crate::{ConfigError, config::check_digit_count};

/// Draws a secret of `digit_count` pairwise distinct digits.
///
/// Each digit is picked uniformly from the digits not yet used by this
/// secret.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDigitCount`] if `digit_count` is 0 or greater
/// than 10.
///
/// # Examples
///
/// ```
/// use codelock_generator::{PuzzleSeed, secret::draw_secret};
///
/// let mut rng = PuzzleSeed::from_phrase("example").rng();
/// let secret = draw_secret(&mut rng, 4)?;
/// assert_eq!(secret.len(), 4);
/// assert!(secret.has_distinct_digits());
/// # Ok::<(), codelock_generator::ConfigError>(())
/// ```
pub fn draw_secret<R>(rng: &mut R, digit_count: usize) -> Result<Code, ConfigError>
where
    R: RngExt + ?Sized,
{
    check_digit_count(digit_count)?;
    let mut pool = DigitSet::FULL;
    let digits = (0..digit_count).map_while(|_| {
        let digit = pool.nth(rng.random_range(0..pool.len()))?;
        pool.remove(digit);
        Some(digit)
    });
    Ok(Code::from_digits(digits)?)
}

/// Returns the secret numbered `index` among the codes of `digit_count`
/// distinct digits.
///
/// Every index below the number of such codes maps to a different secret.
/// Returns `None` for an invalid `digit_count`.
pub(crate) fn nth_secret(mut index: usize, digit_count: usize) -> Option<Code> {
    check_digit_count(digit_count).ok()?;
    let mut pool = DigitSet::FULL;
    let digits = (0..digit_count).map_while(|_| {
        let remaining = pool.len();
        let digit = pool.nth(index.checked_rem(remaining)?)?;
        index /= remaining;
        pool.remove(digit);
        Some(digit)
    });
    Code::from_digits(digits).ok()
}

/// Tracks the secrets issued so far.
///
/// Implementations must make [`try_claim`](Self::try_claim) a single
/// check-and-insert step; the generator relies on it to never hand out the
/// same secret twice.
pub trait SecretStore {
    /// Records `secret` as issued.
    ///
    /// Returns `false`, leaving the store unchanged, if it was already issued.
    fn try_claim(&mut self, secret: &Code) -> bool;

    /// Forgets a previously claimed secret.
    fn release(&mut self, secret: &Code);

    /// Returns `true` if `secret` has been issued.
    fn is_issued(&self, secret: &Code) -> bool;

    /// Returns the number of issued secrets.
    fn issued_count(&self) -> usize;
}

/// In-memory store owned by a single generator.
///
/// # Examples
///
/// ```
/// use codelock_core::Code;
/// use codelock_generator::{IssuedSecrets, SecretStore as _};
///
/// let mut store = IssuedSecrets::new();
/// let secret: Code = "123".parse()?;
/// assert!(store.try_claim(&secret));
/// assert!(!store.try_claim(&secret));
/// assert_eq!(store.issued_count(), 1);
/// # Ok::<(), codelock_core::ParseCodeError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct IssuedSecrets {
    secrets: HashSet<Code>,
}

impl IssuedSecrets {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for IssuedSecrets {
    fn try_claim(&mut self, secret: &Code) -> bool {
        if self.secrets.contains(secret) {
            return false;
        }
        self.secrets.insert(secret.clone())
    }

    fn release(&mut self, secret: &Code) {
        self.secrets.remove(secret);
    }

    fn is_issued(&self, secret: &Code) -> bool {
        self.secrets.contains(secret)
    }

    fn issued_count(&self) -> usize {
        self.secrets.len()
    }
}

/// Store handle that can be cloned and shared between threads.
///
/// All clones refer to the same set. Generators holding clones of one handle
/// never issue the same secret, whichever thread they run on.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use codelock_generator::{PuzzleConfig, PuzzleGenerator, SecretStore as _, SharedSecrets};
///
/// let store = SharedSecrets::new();
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let store = store.clone();
///         thread::spawn(move || {
///             let mut generator = PuzzleGenerator::with_store(store);
///             generator.create_puzzle(&PuzzleConfig::default()).map(|p| p.secret)
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap()?;
/// }
/// assert_eq!(store.issued_count(), 4);
/// # Ok::<(), codelock_generator::GeneratorError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct SharedSecrets {
    inner: Arc<Mutex<HashSet<Code>>>,
}

impl SharedSecrets {
    /// Creates an empty shared store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Code>> {
        // The set stays consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SecretStore for SharedSecrets {
    fn try_claim(&mut self, secret: &Code) -> bool {
        let mut secrets = self.lock();
        if secrets.contains(secret) {
            return false;
        }
        secrets.insert(secret.clone())
    }

    fn release(&mut self, secret: &Code) {
        self.lock().remove(secret);
    }

    fn is_issued(&self, secret: &Code) -> bool {
        self.lock().contains(secret)
    }

    fn issued_count(&self) -> usize {
        self.lock().len()
    }
}
