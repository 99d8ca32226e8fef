//! Code digit representation.

use std::fmt::{self, Display};

/// A code digit in the range 0-9.
///
/// This enum provides type-safe representation of code digits, preventing
/// invalid values at compile time. Each variant corresponds to exactly one
/// decimal digit.
///
/// # Examples
///
/// ```
/// use codelock_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Parse from a character
/// assert_eq!(Digit::try_from('0'), Ok(Digit::D0));
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{digit}");
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    #[default]
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Number of distinct digits.
    pub const COUNT: usize = 10;

    /// Array containing all digits from 0 to 9, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 10);
    /// assert_eq!(Digit::ALL[0], Digit::D0);
    /// assert_eq!(Digit::ALL[9], Digit::D9);
    /// ```
    pub const ALL: [Self; Self::COUNT] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(0), Digit::D0);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use codelock_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` if it is out of range.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        let digit = match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return None,
        };
        Some(digit)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the decimal character for this digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use codelock_core::Digit;
    ///
    /// assert_eq!(Digit::D3.to_char(), '3');
    /// ```
    #[must_use]
    pub const fn to_char(&self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

/// Error returned when a character is not a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit character: {ch:?}")]
pub struct ParseDigitError {
    /// The rejected character.
    pub ch: char,
}

impl TryFrom<char> for Digit {
    type Error = ParseDigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Self::try_from_value)
            .ok_or(ParseDigitError { ch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::from_value(0), Digit::D0);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::D0.value(), 0);
        assert_eq!(Digit::D9.value(), 9);

        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i);
            assert_eq!(Digit::from_value(digit.value()), digit);
        }

        assert_eq!(format!("{}", Digit::D0), "0");
        assert_eq!(format!("{}", Digit::D7), "7");

        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_char_conversion() {
        for digit in Digit::ALL {
            assert_eq!(Digit::try_from(digit.to_char()), Ok(digit));
        }
        assert_eq!(Digit::try_from('a'), Err(ParseDigitError { ch: 'a' }));
        assert_eq!(Digit::try_from('٣'), Err(ParseDigitError { ch: '٣' }));
    }

    #[test]
    fn test_try_from_value_out_of_range() {
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(u8::MAX), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
