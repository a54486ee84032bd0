//! A built crossword puzzle.

use crate::{
    ClueIndex, Grid, GridSize, PayloadError, PuzzlePayload, Word, WordId, WordPlacement,
    WordRegistry, builder,
};

/// A puzzle ready for play: theme, cell grid, and numbered words.
///
/// A puzzle is built once per load and replaced wholesale by the next one.
/// Only cell values and evaluations change during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    theme: String,
    grid: Grid,
    words: WordRegistry,
}

impl Puzzle {
    /// Builds a puzzle without a theme. See [`builder::build`].
    #[must_use]
    pub fn build(size: GridSize, placements: impl IntoIterator<Item = WordPlacement>) -> Self {
        let (grid, words) = builder::build(size, placements);
        Self {
            theme: String::new(),
            grid,
            words,
        }
    }

    /// Validates a provider payload and builds a puzzle from it.
    ///
    /// # Errors
    ///
    /// Returns a [`PayloadError`] if the payload is missing the grid size or
    /// the word list, or a word is malformed.
    pub fn from_payload(payload: &PuzzlePayload) -> Result<Self, PayloadError> {
        let (size, placements) = payload.validate()?;
        let puzzle = Self::build(size, placements).with_theme(payload.theme());
        log::info!(
            "built {} puzzle with {} words, theme {:?}",
            puzzle.grid.size(),
            puzzle.words.len(),
            puzzle.theme,
        );
        Ok(puzzle)
    }

    /// Sets the theme shown with the puzzle.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Returns the theme, empty if none was given.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the cell grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell grid mutably.
    #[must_use]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the word registry.
    #[must_use]
    pub fn words(&self) -> &WordRegistry {
        &self.words
    }

    /// Returns the word with the given id.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Derives the across/down clue lists.
    #[must_use]
    pub fn clue_index(&self) -> ClueIndex<'_> {
        ClueIndex::new(&self.words)
    }
}
