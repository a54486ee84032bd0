//! Letter entry: normalization and auto-advance.

use crossword_core::{Grid, Position, Word};

use crate::GameError;

/// Where the cursor goes after a letter is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum AdvancePolicy {
    /// Move to the next cell of the active word.
    #[default]
    Advance,
    /// Keep the cursor on the edited cell.
    Stay,
}

/// Options for [`Game::enter`](crate::Game::enter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryOptions {
    /// Cursor behaviour after a letter is stored.
    pub advance_policy: AdvancePolicy,
}

impl EntryOptions {
    /// Sets the advance policy.
    #[must_use]
    pub fn advance_policy(mut self, policy: AdvancePolicy) -> Self {
        self.advance_policy = policy;
        self
    }
}

/// What an entry did to the edited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EntryOperation {
    /// A letter was stored.
    Set,
    /// The cell was emptied.
    Cleared,
    /// The cell already held this value.
    NoOp,
}

/// The result of [`Game::enter`](crate::Game::enter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOutcome {
    /// The change applied to the cell.
    pub operation: EntryOperation,
    /// The cell that should receive input focus after auto-advance.
    pub focus: Option<Position>,
}

/// Normalizes raw text input into a cell value.
///
/// Only the first character counts. Empty input clears the cell; a letter is
/// uppercased. Anything else is rejected.
///
/// # Errors
///
/// Returns [`GameError::InvalidCharacter`] if the first character is not
/// alphabetic.
///
/// # Examples
///
/// ```
/// use crossword_game::entry::normalize_input;
///
/// assert_eq!(normalize_input("q"), Ok(Some('Q')));
/// assert_eq!(normalize_input("ab"), Ok(Some('A')));
/// assert_eq!(normalize_input(""), Ok(None));
/// assert!(normalize_input("7").is_err());
/// ```
pub fn normalize_input(input: &str) -> Result<Option<char>, GameError> {
    let Some(first) = input.chars().next() else {
        return Ok(None);
    };
    if !first.is_alphabetic() {
        return Err(GameError::InvalidCharacter { character: first });
    }
    // Multi-char uppercase forms (e.g. 'ß') keep their first char.
    Ok(first.to_uppercase().next())
}

/// Returns the cell after `pos` in `word`, if it exists and is writable.
#[must_use]
pub fn next_in_word(grid: &Grid, word: &Word, pos: Position) -> Option<Position> {
    let index = word.index_of(pos)?;
    word.position_at(index + 1)
        .filter(|&next| grid.is_writable(next))
}
