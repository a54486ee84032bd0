//! Grid cells.

use crate::{Direction, WordId};

/// The result of checking a cell against its solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Evaluation {
    /// The entered letter matches the solution.
    Correct,
    /// The entered letter differs from the solution, or the cell is empty.
    Incorrect,
}

/// Errors raised when mutating a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CellError {
    /// The cell is not part of any word and cannot hold a letter.
    #[display("cell is not part of any word")]
    NotWritable,
}

/// One position of the crossword grid.
///
/// A cell is writable exactly when at least one word passes through it, in
/// which case it also carries the solution letter. Word membership and the
/// solution are fixed by the grid builder; only the player value and the
/// evaluation can change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    solution: Option<char>,
    value: Option<char>,
    clue_number: Option<u32>,
    across: Option<WordId>,
    down: Option<WordId>,
    evaluation: Option<Evaluation>,
}

impl Cell {
    /// Returns `true` if this cell belongs to at least one word.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.across.is_some() || self.down.is_some()
    }

    /// Returns `true` if this cell belongs to both an across and a down word.
    #[must_use]
    pub fn is_crossing(&self) -> bool {
        self.across.is_some() && self.down.is_some()
    }

    /// Returns the solution letter, or `None` for non-writable cells.
    #[must_use]
    pub fn solution(&self) -> Option<char> {
        self.solution
    }

    /// Returns the letter entered by the player.
    #[must_use]
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Returns `true` if the player has not entered a letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the display number printed on this cell, if it starts a word.
    #[must_use]
    pub fn clue_number(&self) -> Option<u32> {
        self.clue_number
    }

    /// Returns the word passing through this cell in `direction`.
    #[must_use]
    pub fn word(&self, direction: Direction) -> Option<WordId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    /// Picks the word to activate when this cell is selected.
    ///
    /// The word in `current` direction wins if there is one; otherwise across is
    /// preferred over down. Returns `None` only for non-writable cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::{Direction, GridSize, Position, Puzzle, WordPlacement};
    ///
    /// let puzzle = Puzzle::build(
    ///     GridSize::new(3, 3),
    ///     [WordPlacement::new("ABC", "Letters", Direction::Down, Position::new(0, 1))],
    /// );
    /// let cell = &puzzle.grid()[Position::new(1, 1)];
    /// let (direction, _) = cell.preferred_word(Direction::Across).unwrap();
    /// assert_eq!(direction, Direction::Down);
    /// ```
    #[must_use]
    pub fn preferred_word(&self, current: Direction) -> Option<(Direction, WordId)> {
        [current, Direction::Across, Direction::Down]
            .into_iter()
            .find_map(|direction| self.word(direction).map(|id| (direction, id)))
    }

    /// Returns the last evaluation applied by an answer check.
    #[must_use]
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Sets or clears the player letter.
    ///
    /// The caller is responsible for normalizing the letter.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::NotWritable`] if the cell is not part of any word.
    pub fn set_value(&mut self, value: Option<char>) -> Result<(), CellError> {
        if !self.is_writable() {
            return Err(CellError::NotWritable);
        }
        self.value = value;
        Ok(())
    }

    /// Sets or clears the evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::NotWritable`] if the cell is not part of any word.
    pub fn set_evaluation(&mut self, evaluation: Option<Evaluation>) -> Result<(), CellError> {
        if !self.is_writable() {
            return Err(CellError::NotWritable);
        }
        self.evaluation = evaluation;
        Ok(())
    }

    pub(crate) fn assign(&mut self, direction: Direction, id: WordId, letter: char) {
        self.solution = Some(letter);
        match direction {
            Direction::Across => self.across = Some(id),
            Direction::Down => self.down = Some(id),
        }
    }

    pub(crate) fn set_clue_number(&mut self, number: u32) {
        self.clue_number = Some(number);
    }
}
