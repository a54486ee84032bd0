//! Word placements, numbered words, and the word registry.

use std::ops::Index;

use crate::{Direction, Position};

/// Identifies a word by its index in the input placement list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("#{_0}")]
pub struct WordId(usize);

impl WordId {
    /// Creates a word id from an index into the placement list.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index into the placement list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A word as supplied by the puzzle provider: text, clue, and where it starts.
///
/// The text is stored uppercased. Placements are assumed valid upstream but are
/// not trusted; the builder drops letters that fall outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    text: String,
    clue: String,
    direction: Direction,
    start: Position,
}

impl WordPlacement {
    /// Creates a placement, uppercasing `text`.
    #[must_use]
    pub fn new(
        text: impl AsRef<str>,
        clue: impl Into<String>,
        direction: Direction,
        start: Position,
    ) -> Self {
        Self {
            text: text.as_ref().to_uppercase(),
            clue: clue.into(),
            direction,
            start,
        }
    }

    /// Returns the uppercase answer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the orientation of the word.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the position of the letter at `index`.
    ///
    /// Returns `None` if `index` is past the end of the word.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<Position> {
        if index >= self.len() {
            return None;
        }
        self.start.offset(self.direction, index)
    }

    /// Returns the index of the letter at `pos`, if the word covers it.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        pos.distance_from(self.start, self.direction)
            .filter(|&index| index < self.len())
    }

    /// Returns `true` if `pos` holds the last letter of the word.
    #[must_use]
    pub fn is_last(&self, pos: Position) -> bool {
        self.index_of(pos)
            .is_some_and(|index| index + 1 == self.len())
    }

    /// Iterates over each letter with its position, in reading order.
    ///
    /// Positions are not bounds-checked against any grid.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> {
        self.text
            .chars()
            .enumerate()
            .map_while(|(index, letter)| Some((self.start.offset(self.direction, index)?, letter)))
    }
}

/// A placement after numbering: its id and the number printed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    display_number: u32,
    placement: WordPlacement,
}

impl Word {
    pub(crate) fn new(id: WordId, display_number: u32, placement: WordPlacement) -> Self {
        Self {
            id,
            display_number,
            placement,
        }
    }

    /// Returns the stable id of this word.
    #[must_use]
    pub fn id(&self) -> WordId {
        self.id
    }

    /// Returns the clue number shared by all words starting at the same cell.
    #[must_use]
    pub fn display_number(&self) -> u32 {
        self.display_number
    }

    /// Returns the underlying placement.
    #[must_use]
    pub fn placement(&self) -> &WordPlacement {
        &self.placement
    }

    /// Returns the uppercase answer text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.placement.text()
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        self.placement.clue()
    }

    /// Returns the orientation of the word.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.placement.direction()
    }

    /// Returns the position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.placement.start()
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placement.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }

    /// See [`WordPlacement::position_at`].
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<Position> {
        self.placement.position_at(index)
    }

    /// See [`WordPlacement::index_of`].
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.placement.index_of(pos)
    }

    /// See [`WordPlacement::is_last`].
    #[must_use]
    pub fn is_last(&self, pos: Position) -> bool {
        self.placement.is_last(pos)
    }
}

/// All words of a puzzle, in input order. `WordId(i)` is the `i`th entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRegistry {
    words: Vec<Word>,
}

impl WordRegistry {
    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        debug_assert!(words.iter().enumerate().all(|(i, w)| w.id.index() == i));
        Self { words }
    }

    /// Returns the word with the given id.
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.index())
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl Index<WordId> for WordRegistry {
    type Output = Word;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id.index()]
    }
}

impl<'a> IntoIterator for &'a WordRegistry {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
