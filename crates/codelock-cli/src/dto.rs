//! Serializable puzzle representation for JSON output.

use codelock_generator::{Hint, Puzzle};
use serde::{Deserialize, Serialize};

/// JSON form of a [`Puzzle`].
///
/// Codes are strings of decimal characters; blank input slots are empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PuzzleDto {
    pub(crate) seed: String,
    pub(crate) secret: String,
    pub(crate) user_input: Vec<String>,
    pub(crate) hints: Vec<HintDto>,
    pub(crate) level: u32,
    pub(crate) description: String,
}

/// JSON form of a [`Hint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct HintDto {
    pub(crate) code: String,
    pub(crate) message: String,
    pub(crate) is_locked: bool,
}

impl From<&Hint> for HintDto {
    fn from(hint: &Hint) -> Self {
        Self {
            code: hint.code.to_string(),
            message: hint.message.clone(),
            is_locked: hint.is_locked,
        }
    }
}

impl From<&Puzzle> for PuzzleDto {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            seed: puzzle.seed.to_string(),
            secret: puzzle.secret.to_string(),
            user_input: puzzle
                .user_input
                .iter()
                .map(|slot| slot.map(|digit| digit.to_string()).unwrap_or_default())
                .collect(),
            hints: puzzle.hints.iter().map(HintDto::from).collect(),
            level: puzzle.level.value(),
            description: puzzle.description.to_owned(),
        }
    }
}
