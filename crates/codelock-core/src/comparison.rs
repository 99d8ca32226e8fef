//! Comparing a candidate code against a secret.
//!
//! [`compare`] counts exact positional matches and shared digit values, and
//! [`Comparison::feedback`] classifies the result into the message shown next
//! to a hint.
//!
//! The shared-value count is set-based: each digit value counts once no
//! matter how often it occurs in either code, and position matches are
//! subtracted from it afterwards. For codes with repeated digits this can
//! drive [`Comparison::correct_count`] to zero or below; the feedback rules
//! treat any such value as "nothing in the wrong position".
//!
//! # Examples
//!
//! ```
//! use codelock_core::{Code, Feedback, compare};
//!
//! let secret: Code = "123".parse()?;
//! let candidate: Code = "321".parse()?;
//!
//! let comparison = compare(&candidate, &secret);
//! assert_eq!(comparison.correct_position, 1);
//! assert_eq!(comparison.correct_count, 2);
//!
//! // Position matches take priority over misplaced digits.
//! assert_eq!(comparison.feedback(), Some(Feedback::CorrectPosition(1)));
//! assert_eq!(
//!     comparison.feedback().unwrap().to_string(),
//!     "1 number(s) correct, and in the correct position."
//! );
//! # Ok::<(), codelock_core::ParseCodeError>(())
//! ```

use crate::Code;

/// Result of matching a candidate code against a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparison {
    /// Number of indices where both codes hold the same digit.
    pub correct_position: u8,
    /// Number of digit values present in both codes, minus
    /// [`correct_position`](Self::correct_position). May be negative.
    pub correct_count: i16,
}

/// Classified outcome of a [`Comparison`].
///
/// The `Display` form is the human-readable hint message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Feedback {
    /// No digit is in the correct position and no shared digit remains.
    #[display("none correct.")]
    NoneCorrect,
    /// This many digits are in the correct position.
    #[display("{_0} number(s) correct, and in the correct position.")]
    CorrectPosition(u8),
    /// This many digits are shared but none is in the correct position.
    #[display("{_0} number(s) correct, but in the wrong position.")]
    WrongPosition(u8),
}

/// Compares `candidate` against `secret`.
///
/// Positions are compared over the common prefix of both codes.
#[must_use]
pub fn compare(candidate: &Code, secret: &Code) -> Comparison {
    let correct_position = candidate
        .iter()
        .zip(secret.iter())
        .filter(|(a, b)| a == b)
        .fold(0_u8, |n, _| n + 1);
    let shared = (candidate.digit_set() & secret.digit_set())
        .iter()
        .fold(0_u8, |n, _| n + 1);

    Comparison {
        correct_position,
        correct_count: i16::from(shared) - i16::from(correct_position),
    }
}

impl Comparison {
    /// Classifies this comparison.
    ///
    /// Rules are checked in order:
    ///
    /// 1. nothing positioned and `correct_count <= 0`: [`Feedback::NoneCorrect`]
    /// 2. any positioned digit: [`Feedback::CorrectPosition`]
    /// 3. `correct_count > 0`: [`Feedback::WrongPosition`]
    ///
    /// Returns `None` when no rule applies; such a comparison is
    /// uninformative and its candidate should not be shown as a hint.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if self.correct_count <= 0 && self.correct_position == 0 {
            return Some(Feedback::NoneCorrect);
        }
        if self.correct_position > 0 {
            return Some(Feedback::CorrectPosition(self.correct_position));
        }
        if self.correct_count > 0 {
            return u8::try_from(self.correct_count)
                .ok()
                .map(Feedback::WrongPosition);
        }
        None
    }

    /// Returns the hint message for this comparison, if it has one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.feedback().map(|feedback| feedback.to_string())
    }
}
