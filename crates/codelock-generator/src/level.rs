//! Difficulty levels.

use std::num::NonZeroU32;

use crate::ConfigError;

/// Descriptions shown for levels 1 through 5.
///
/// Levels above 5 reuse the last entry.
pub const LEVEL_DESCRIPTIONS: [&str; 5] = [
    "Beginner: a warm-up puzzle to get familiar with the rules.",
    "Elementary: every hint needs careful analysis.",
    "Intermediate: hints are more intricate and demand more reasoning.",
    "Advanced: fewer hints put your solving technique to the test.",
    "Expert: hints are more misleading and call for rigorous thinking.",
];

/// A difficulty level, starting at 1.
///
/// The level selects the description shown with a puzzle and how many of the
/// last generated hints start out locked.
///
/// # Examples
///
/// ```
/// use codelock_generator::Level;
///
/// let level = Level::new(3)?;
/// assert_eq!(level.value(), 3);
/// assert_eq!(level.locked_hint_count(), 1);
/// assert!(level.description().starts_with("Intermediate"));
/// # Ok::<(), codelock_generator::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Level(NonZeroU32);

impl Level {
    /// The first level.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Creates a level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLevel`] if `value` is 0.
    pub fn new(value: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ConfigError::ZeroLevel)
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }

    /// Returns how many of a puzzle's last hints start out locked.
    ///
    /// This is `floor(level / 2)`.
    #[must_use]
    pub fn locked_hint_count(self) -> usize {
        usize::try_from(self.value() / 2).unwrap_or(usize::MAX)
    }

    /// Returns the index of the first locked hint in a batch of `hint_count`.
    ///
    /// Hints before this index are unlocked. When the level locks at least
    /// `hint_count` hints, the boundary is 0 and every hint is locked.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_generator::Level;
    ///
    /// assert_eq!(Level::new(1)?.lock_boundary(5), 5);
    /// assert_eq!(Level::new(3)?.lock_boundary(6), 5);
    /// assert_eq!(Level::new(20)?.lock_boundary(6), 0);
    /// # Ok::<(), codelock_generator::ConfigError>(())
    /// ```
    #[must_use]
    pub fn lock_boundary(self, hint_count: usize) -> usize {
        hint_count.saturating_sub(self.locked_hint_count())
    }

    /// Returns the description for this level.
    #[must_use]
    pub fn description(self) -> &'static str {
        level_description(self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

/// Returns the description for `level`, clamped to the last description.
#[must_use]
pub fn level_description(level: Level) -> &'static str {
    let index = usize::try_from(level.value() - 1)
        .unwrap_or(usize::MAX)
        .min(LEVEL_DESCRIPTIONS.len() - 1);
    LEVEL_DESCRIPTIONS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_level_rejected() {
        assert_eq!(Level::new(0), Err(ConfigError::ZeroLevel));
    }

    #[test]
    fn test_descriptions_by_level() {
        for (i, description) in LEVEL_DESCRIPTIONS.into_iter().enumerate() {
            let level = Level::new(u32::try_from(i).unwrap() + 1).unwrap();
            assert_eq!(level.description(), description);
        }
    }

    #[test]
    fn test_description_clamps_above_five() {
        let fifth = Level::new(5).unwrap().description();
        for value in [6, 7, 100, u32::MAX] {
            assert_eq!(Level::new(value).unwrap().description(), fifth);
        }
    }

    #[test]
    fn test_locked_hint_count() {
        let counts: Vec<_> = (1..=6)
            .map(|value| Level::new(value).unwrap().locked_hint_count())
            .collect();
        assert_eq!(counts, vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_lock_boundary_saturates() {
        let level = Level::new(9).unwrap();
        assert_eq!(level.lock_boundary(3), 0);
        assert_eq!(level.lock_boundary(0), 0);
        assert_eq!(Level::MIN.lock_boundary(0), 0);
    }
}
