//! Hint codes and hint batches.

use std::collections::HashSet;

use codelock_core::{Code, Comparison, Digit, Feedback, compare};
use rand::RngExt;

use crate::{ConfigError, GeneratorError, Level, config::code_space_size};

/// A candidate code shown to the player together with its feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The candidate code.
    pub code: Code,
    /// How the candidate compares against the secret.
    pub comparison: Comparison,
    /// Human-readable feedback for the comparison.
    pub message: String,
    /// Whether the hint starts out hidden from the player.
    pub is_locked: bool,
}

/// Draws a hint code of `length` digits.
///
/// Each digit is drawn independently and uniformly, so digits may repeat.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDigitCount`] if `length` is 0 or greater than
/// [`Code::MAX_LEN`].
pub fn draw_hint_code<R>(rng: &mut R, length: usize) -> Result<Code, ConfigError>
where
    R: RngExt + ?Sized,
{
    let digits = (0..length).map(|_| Digit::ALL[rng.random_range(0..Digit::COUNT)]);
    Ok(Code::from_digits(digits)?)
}

/// Generates `hint_count` hints for `secret`.
///
/// Each hint is found by drawing candidates with [`draw_hint_code`], up to
/// `max_attempts` draws per hint. A candidate is rejected if it was already
/// accepted for this batch or if its comparison has no feedback. When the
/// draws run out, the codes are scanned in order from a random starting point
/// and the first acceptable one is taken, so a batch that fits in the code
/// space always completes.
///
/// Accepted hints keep their generation order; those at or after
/// [`Level::lock_boundary`] are locked.
///
/// # Errors
///
/// - [`GeneratorError::HintSpaceExhausted`] if `hint_count` exceeds the number
///   of distinct codes of the secret's length.
/// - [`GeneratorError::InvalidConfig`] if `secret` is longer than a hint code
///   can be.
///
/// # Examples
///
/// ```
/// use codelock_core::Code;
/// use codelock_generator::{Level, PuzzleSeed, hint::generate_hints};
///
/// let mut rng = PuzzleSeed::from_phrase("hints").rng();
/// let secret: Code = "407".parse()?;
/// let hints = generate_hints(&mut rng, &secret, 6, Level::new(3)?, 10_000)?;
///
/// assert_eq!(hints.len(), 6);
/// assert!(hints[..5].iter().all(|hint| !hint.is_locked));
/// assert!(hints[5].is_locked);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_hints<R>(
    rng: &mut R,
    secret: &Code,
    hint_count: usize,
    level: Level,
    max_attempts: usize,
) -> Result<Vec<Hint>, GeneratorError>
where
    R: RngExt + ?Sized,
{
    let space = code_space_size(secret.len());
    if let Some(available) = space.filter(|&available| hint_count > available) {
        log::warn!("{hint_count} hints requested for a {}-digit secret", secret.len());
        return Err(GeneratorError::HintSpaceExhausted {
            hint_count,
            available,
        });
    }

    let lock_boundary = level.lock_boundary(hint_count);
    let mut used = HashSet::with_capacity(hint_count);
    let mut hints = Vec::with_capacity(hint_count);

    while hints.len() < hint_count {
        let next = next_hint(rng, secret, &used, max_attempts, space.unwrap_or(usize::MAX))?;
        let Some((code, comparison, feedback)) = next else {
            log::warn!(
                "no unused hint code left for a {}-digit secret after {} hints",
                secret.len(),
                hints.len(),
            );
            return Err(GeneratorError::HintSpaceExhausted {
                hint_count,
                available: hints.len(),
            });
        };

        used.insert(code.clone());
        hints.push(Hint {
            is_locked: hints.len() >= lock_boundary,
            code,
            comparison,
            message: feedback.to_string(),
        });
    }

    Ok(hints)
}

/// Finds one acceptable candidate, drawing first and scanning `space` codes
/// once the draws run out.
fn next_hint<R>(
    rng: &mut R,
    secret: &Code,
    used: &HashSet<Code>,
    max_attempts: usize,
    space: usize,
) -> Result<Option<(Code, Comparison, Feedback)>, ConfigError>
where
    R: RngExt + ?Sized,
{
    for _ in 0..max_attempts {
        let code = draw_hint_code(rng, secret.len())?;
        if let Some((comparison, feedback)) = evaluate(&code, secret, used) {
            return Ok(Some((code, comparison, feedback)));
        }
    }

    log::debug!("no new hint code in {max_attempts} draws, scanning");
    let start = rng.random_range(0..space);
    for index in (start..space).chain(0..start) {
        let Some(code) = nth_code(index, secret.len()) else {
            break;
        };
        if let Some((comparison, feedback)) = evaluate(&code, secret, used) {
            return Ok(Some((code, comparison, feedback)));
        }
    }
    Ok(None)
}

fn evaluate(code: &Code, secret: &Code, used: &HashSet<Code>) -> Option<(Comparison, Feedback)> {
    if used.contains(code) {
        log::trace!("duplicate hint code {code}");
        return None;
    }
    let comparison = compare(code, secret);
    let Some(feedback) = comparison.feedback() else {
        log::trace!("uninformative hint code {code}");
        return None;
    };
    Some((comparison, feedback))
}

/// Returns the code of `length` digits whose decimal value is `index`.
fn nth_code(mut index: usize, length: usize) -> Option<Code> {
    let mut digits = vec![Digit::D0; length];
    for slot in digits.iter_mut().rev() {
        *slot = Digit::ALL[index % Digit::COUNT];
        index /= Digit::COUNT;
    }
    Code::from_digits(digits).ok()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::PuzzleSeed;

    #[test]
    fn test_draw_hint_code_length() {
        let mut rng = PuzzleSeed::from_phrase("hint length").rng();
        for length in 1..=Code::MAX_LEN {
            assert_eq!(draw_hint_code(&mut rng, length).unwrap().len(), length);
        }
        assert!(draw_hint_code(&mut rng, 0).is_err());
        assert!(draw_hint_code(&mut rng, 11).is_err());
    }

    #[test]
    fn test_draw_hint_code_repeats_digits() {
        let mut rng = PuzzleSeed::from_phrase("repeats").rng();
        let repeated = (0..500)
            .map(|_| draw_hint_code(&mut rng, 3).unwrap())
            .any(|code| !code.has_distinct_digits());
        assert!(repeated);
    }

    #[test]
    fn test_messages_match_comparisons() {
        let mut rng = PuzzleSeed::from_phrase("messages").rng();
        let secret: Code = "123".parse().unwrap();
        let hints = generate_hints(&mut rng, &secret, 20, Level::MIN, 10_000).unwrap();
        for hint in &hints {
            let comparison = compare(&hint.code, &secret);
            assert_eq!(hint.comparison, comparison);
            assert_eq!(Some(hint.message.clone()), comparison.message());
        }
    }

    #[test]
    fn test_level_one_locks_nothing() {
        let mut rng = PuzzleSeed::from_phrase("level one").rng();
        let secret: Code = "58".parse().unwrap();
        let hints = generate_hints(&mut rng, &secret, 5, Level::MIN, 10_000).unwrap();
        assert!(hints.iter().all(|hint| !hint.is_locked));
    }

    #[test]
    fn test_high_level_locks_everything() {
        let mut rng = PuzzleSeed::from_phrase("high level").rng();
        let secret: Code = "58".parse().unwrap();
        let level = Level::new(40).unwrap();
        let hints = generate_hints(&mut rng, &secret, 5, level, 10_000).unwrap();
        assert!(hints.iter().all(|hint| hint.is_locked));
    }

    #[test]
    fn test_whole_code_space() {
        let mut rng = PuzzleSeed::from_phrase("all ten").rng();
        let secret: Code = "4".parse().unwrap();
        let hints = generate_hints(&mut rng, &secret, 10, Level::MIN, 100_000).unwrap();
        let mut codes: Vec<_> = hints.iter().map(|hint| hint.code.to_string()).collect();
        codes.sort();
        assert_eq!(codes, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_more_hints_than_codes() {
        let mut rng = PuzzleSeed::from_phrase("limit").rng();
        let secret: Code = "4".parse().unwrap();
        assert_eq!(
            generate_hints(&mut rng, &secret, 11, Level::MIN, 50),
            Err(GeneratorError::HintSpaceExhausted {
                hint_count: 11,
                available: 10,
            })
        );
    }

    #[test]
    fn test_scan_without_draws() {
        let mut rng = PuzzleSeed::from_phrase("scan").rng();
        let secret: Code = "58".parse().unwrap();
        let hints = generate_hints(&mut rng, &secret, 100, Level::MIN, 0).unwrap();
        let codes: HashSet<_> = hints.iter().map(|hint| &hint.code).collect();
        assert_eq!(codes.len(), 100);
        for hint in &hints {
            assert_eq!(hint.comparison, compare(&hint.code, &secret));
        }
    }

    #[test]
    fn test_nth_code() {
        assert_eq!(nth_code(0, 3).unwrap().to_string(), "000");
        assert_eq!(nth_code(47, 3).unwrap().to_string(), "047");
        assert_eq!(nth_code(9_999, 4).unwrap().to_string(), "9999");
        assert_eq!(nth_code(0, 0), None);
    }

    #[test]
    fn test_zero_hints() {
        let mut rng = PuzzleSeed::from_phrase("none").rng();
        let secret: Code = "123".parse().unwrap();
        let hints = generate_hints(&mut rng, &secret, 0, Level::MIN, 0).unwrap();
        assert!(hints.is_empty());
    }

    proptest! {
        #[test]
        fn prop_hint_batch_invariants(
            phrase in ".*",
            level in 1_u32..12,
            hint_count in 0_usize..15,
        ) {
            let mut rng = PuzzleSeed::from_phrase(&phrase).rng();
            let secret: Code = "0369".parse().unwrap();
            let level = Level::new(level).unwrap();
            let hints = generate_hints(&mut rng, &secret, hint_count, level, 100_000).unwrap();

            prop_assert_eq!(hints.len(), hint_count);
            let codes: HashSet<_> = hints.iter().map(|hint| &hint.code).collect();
            prop_assert_eq!(codes.len(), hint_count);

            let boundary = level.lock_boundary(hint_count);
            for (i, hint) in hints.iter().enumerate() {
                prop_assert_eq!(hint.is_locked, i >= boundary);
                prop_assert_eq!(hint.code.len(), secret.len());
            }
        }
    }
}
