//! Across and down clue lists.

use std::fmt;

use crate::{Direction, Word, WordId, WordRegistry};

/// Clue lists derived from a [`WordRegistry`].
///
/// Each list holds the words of one direction, ordered by display number.
/// The index borrows the registry, so it always reflects the current puzzle.
#[derive(Debug, Clone)]
pub struct ClueIndex<'a> {
    across: Vec<ClueEntry<'a>>,
    down: Vec<ClueEntry<'a>>,
}

impl<'a> ClueIndex<'a> {
    /// Partitions `words` by direction and sorts each part by display number.
    ///
    /// The sort is stable, so input order decides between equal numbers.
    #[must_use]
    pub fn new(words: &'a WordRegistry) -> Self {
        let (mut across, mut down): (Vec<_>, Vec<_>) = words
            .iter()
            .map(|word| ClueEntry { word })
            .partition(|entry| entry.direction().is_across());
        across.sort_by_key(ClueEntry::display_number);
        down.sort_by_key(ClueEntry::display_number);
        Self { across, down }
    }

    /// Returns the across clues.
    #[must_use]
    pub fn across(&self) -> &[ClueEntry<'a>] {
        &self.across
    }

    /// Returns the down clues.
    #[must_use]
    pub fn down(&self) -> &[ClueEntry<'a>] {
        &self.down
    }

    /// Returns the clues for `direction`.
    #[must_use]
    pub fn entries(&self, direction: Direction) -> &[ClueEntry<'a>] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Finds the clue with `number` in `direction`.
    #[must_use]
    pub fn find(&self, number: u32, direction: Direction) -> Option<ClueEntry<'a>> {
        self.entries(direction)
            .iter()
            .find(|entry| entry.display_number() == number)
            .copied()
    }
}

/// One line of a clue list.
///
/// Formats as `"{number}. {clue} ({length})"`.
#[derive(Debug, Clone, Copy)]
pub struct ClueEntry<'a> {
    word: &'a Word,
}

impl<'a> ClueEntry<'a> {
    /// Returns the id of the word this clue belongs to.
    #[must_use]
    pub fn word_id(&self) -> WordId {
        self.word.id()
    }

    /// Returns the clue number.
    #[must_use]
    pub fn display_number(&self) -> u32 {
        self.word.display_number()
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &'a str {
        self.word.clue()
    }

    /// Returns the direction of the word.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.word.direction()
    }

    /// Returns the answer length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Returns `true` if the answer has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the underlying word.
    #[must_use]
    pub fn word(&self) -> &'a Word {
        self.word
    }
}

impl fmt::Display for ClueEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.display_number(), self.clue(), self.len())
    }
}
