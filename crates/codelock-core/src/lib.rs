//! Core data structures for code-breaking puzzles.
//!
//! This crate provides the pure, stateless building blocks shared by puzzle
//! generation and by anything that consumes generated puzzles.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of code digits 0-9
//! - [`digit_set`]: Bit set of digit values
//! - [`code`]: Fixed-length digit codes, parsed from and displayed as strings
//! - [`comparison`]: Matching a candidate code against a secret and
//!   classifying the result into a hint message
//!
//! # Examples
//!
//! ```
//! use codelock_core::{Code, compare};
//!
//! let secret: Code = "857".parse()?;
//! let guess: Code = "123".parse()?;
//!
//! let comparison = compare(&guess, &secret);
//! assert_eq!(comparison.message().as_deref(), Some("none correct."));
//! # Ok::<(), codelock_core::ParseCodeError>(())
//! ```

pub mod code;
pub mod comparison;
pub mod digit;
pub mod digit_set;

pub use self::{
    code::{Code, ParseCodeError},
    comparison::{Comparison, Feedback, compare},
    digit::{Digit, ParseDigitError},
    digit_set::DigitSet,
};
