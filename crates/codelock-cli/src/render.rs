//! Plain-text puzzle output.

use std::io::{self, Write};

use codelock_generator::Puzzle;

/// Writes `puzzle` as text.
///
/// Locked hints and the secret are hidden unless `reveal` is set.
pub(crate) fn write_text<W>(out: &mut W, number: usize, puzzle: &Puzzle, reveal: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Puzzle {number}")?;
    writeln!(out, "  Seed:  {}", puzzle.seed)?;
    writeln!(out, "  Level: {} ({})", puzzle.level, puzzle.description)?;

    let blanks = vec!["_"; puzzle.user_input.len()].join(" ");
    writeln!(out, "  Input: {blanks}")?;

    writeln!(out, "  Hints:")?;
    for (i, hint) in puzzle.hints.iter().enumerate() {
        if hint.is_locked && !reveal {
            writeln!(out, "    {:>2}. [locked]", i + 1)?;
        } else {
            writeln!(out, "    {:>2}. {}  {}", i + 1, hint.code, hint.message)?;
        }
    }

    if reveal {
        writeln!(out, "  Secret: {}", puzzle.secret)?;
    }
    Ok(())
}
