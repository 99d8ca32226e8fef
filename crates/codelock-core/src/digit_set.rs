//! A set of code digits.
//!
//! [`DigitSet`] stores digits 0-9 as a 10-bit mask. It is the value-set used by
//! [`compare`](crate::compare) and the remaining-symbol pool used when drawing
//! secrets without replacement.
//!
//! # Examples
//!
//! ```
//! use codelock_core::{Digit, DigitSet};
//!
//! let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
//! let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
//!
//! assert_eq!((a & b).len(), 2);
//! ```

use std::ops::BitAnd;

use crate::Digit;

/// A set of digits 0-9, represented as a bitset.
///
/// Bit `n` is set when digit `n` is a member. Iteration yields digits in
/// ascending order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all ten digits.
    pub const FULL: Self = Self { bits: 0x3ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let was_absent = !self.contains(digit);
        self.bits |= Self::mask(digit);
        was_absent
    }

    /// Removes a digit, returning `true` if it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let was_present = self.contains(digit);
        self.bits &= !Self::mask(digit);
        was_present
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the digits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the `n`-th smallest digit of the set, or `None` if `n >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D7, Digit::D2, Digit::D5]);
    /// assert_eq!(set.nth(0), Some(Digit::D2));
    /// assert_eq!(set.nth(2), Some(Digit::D7));
    /// assert_eq!(set.nth(3), None);
    /// ```
    #[must_use]
    pub fn nth(self, n: usize) -> Option<Digit> {
        self.iter().nth(n)
    }

    /// Iterates over the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL
            .into_iter()
            .filter(move |&digit| self.contains(digit))
    }

    const fn mask(digit: Digit) -> u16 {
        1 << digit.value()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}
