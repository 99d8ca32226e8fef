//! Fixed-length digit codes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Digit, DigitSet};

/// An ordered sequence of 1 to [`Code::MAX_LEN`] digits.
///
/// Codes are used both for secrets and for hint candidates. Their textual form
/// is the string of decimal characters, e.g. `"042"`.
///
/// # Examples
///
/// ```
/// use codelock_core::{Code, Digit};
///
/// let code: Code = "042".parse()?;
/// assert_eq!(code.len(), 3);
/// assert_eq!(code.digits(), &[Digit::D0, Digit::D4, Digit::D2]);
/// assert_eq!(code.to_string(), "042");
/// # Ok::<(), codelock_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: ArrayVec<[Digit; Digit::COUNT]>,
}

/// Errors that can occur when building or parsing a [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCodeError {
    /// The code has no digits.
    #[display("code is empty")]
    Empty,
    /// The code is longer than [`Code::MAX_LEN`].
    #[display("code has {len} digits, at most {max} are allowed")]
    TooLong {
        /// Number of digits supplied.
        len: usize,
        /// Maximum supported length.
        max: usize,
    },
    /// A character is not a decimal digit.
    #[display("invalid digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Character index of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl Code {
    /// Maximum number of digits in a code.
    pub const MAX_LEN: usize = Digit::COUNT;

    /// Builds a code from a sequence of digits.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCodeError::Empty`] if `digits` yields nothing, or
    /// [`ParseCodeError::TooLong`] if it yields more than [`Code::MAX_LEN`]
    /// digits.
    pub fn from_digits<I>(digits: I) -> Result<Self, ParseCodeError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut buf = ArrayVec::new();
        let mut len = 0;
        for digit in digits {
            len += 1;
            // overflowing digits are only counted
            let _ = buf.try_push(digit);
        }
        if len > Self::MAX_LEN {
            return Err(ParseCodeError::TooLong {
                len,
                max: Self::MAX_LEN,
            });
        }
        if len == 0 {
            return Err(ParseCodeError::Empty);
        }
        Ok(Self { digits: buf })
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`: a code holds at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digits in order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Iterates over the digits in order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }

    /// Returns the set of digit values used by this code.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_core::Code;
    ///
    /// let code: Code = "1221".parse()?;
    /// assert_eq!(code.digit_set().len(), 2);
    /// # Ok::<(), codelock_core::ParseCodeError>(())
    /// ```
    #[must_use]
    pub fn digit_set(&self) -> DigitSet {
        self.iter().collect()
    }

    /// Returns `true` if no digit occurs more than once.
    #[must_use]
    pub fn has_distinct_digits(&self) -> bool {
        self.digit_set().len() == self.len()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                Digit::try_from(ch).map_err(|_| ParseCodeError::InvalidDigit { index, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_digits(digits)
    }
}

impl TryFrom<&[Digit]> for Code {
    type Error = ParseCodeError;

    fn try_from(digits: &[Digit]) -> Result<Self, Self::Error> {
        Self::from_digits(digits.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let code: Code = "0907".parse().unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(
            code.digits(),
            &[Digit::D0, Digit::D9, Digit::D0, Digit::D7]
        );
        assert_eq!(code.to_string(), "0907");
        assert!(!code.has_distinct_digits());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Code>(), Err(ParseCodeError::Empty));
        assert_eq!(
            "12x".parse::<Code>(),
            Err(ParseCodeError::InvalidDigit { index: 2, ch: 'x' })
        );
        assert_eq!(
            "01234567890".parse::<Code>(),
            Err(ParseCodeError::TooLong { len: 11, max: 10 })
        );
    }

    #[test]
    fn test_max_length_accepted() {
        let code: Code = "9876543210".parse().unwrap();
        assert_eq!(code.len(), Code::MAX_LEN);
        assert!(code.has_distinct_digits());
        assert_eq!(code.digit_set(), DigitSet::FULL);
    }

    #[test]
    fn test_try_from_slice() {
        let code = Code::try_from(&[Digit::D4, Digit::D2][..]).unwrap();
        assert_eq!(code.to_string(), "42");
        let empty: &[Digit] = &[];
        assert_eq!(Code::try_from(empty), Err(ParseCodeError::Empty));
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(s in "[0-9]{1,10}") {
            let code: Code = s.parse().unwrap();
            prop_assert_eq!(code.len(), s.len());
            prop_assert_eq!(code.to_string(), s);
        }

        #[test]
        fn prop_distinct_matches_digit_set(s in "[0-9]{1,10}") {
            let code: Code = s.parse().unwrap();
            let mut chars: Vec<char> = s.chars().collect();
            chars.sort_unstable();
            chars.dedup();
            prop_assert_eq!(code.digit_set().len(), chars.len());
            prop_assert_eq!(code.has_distinct_digits(), chars.len() == s.len());
        }
    }
}
