use crossword_core::{ClueEntry, ClueIndex, Evaluation, Grid, Position, Puzzle, Word};

use crate::{
    CheckReport, EntryOperation, EntryOptions, EntryOutcome, GameError, NavEvent, NavigationState,
    Transition,
    check::{self, CheckOutcome},
    entry, navigation,
};

/// A crossword game in progress.
///
/// Owns the puzzle, the navigation state, and whether the answers are currently
/// checked. Every change to the puzzle or the cursor goes through this type so
/// that navigation invariants and check state stay consistent with the grid.
///
/// # Example
///
/// ```
/// use crossword_core::{Direction, GridSize, Position, Puzzle, WordPlacement};
/// use crossword_game::{EntryOptions, Game, NavEvent};
///
/// let puzzle = Puzzle::build(
///     GridSize::new(3, 3),
///     [WordPlacement::new("CAT", "Feline", Direction::Across, Position::new(0, 0))],
/// );
/// let mut game = Game::new(puzzle);
///
/// let _ = game.handle(NavEvent::Activate(Position::new(0, 0)));
/// let outcome = game.enter(Position::new(0, 0), "c", &EntryOptions::default()).unwrap();
/// assert_eq!(outcome.focus, Some(Position::new(0, 1)));
/// assert_eq!(game.grid()[Position::new(0, 0)].value(), Some('C'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    navigation: NavigationState,
    checked: bool,
}

impl Game {
    /// Starts a game on `puzzle` with the initial navigation state.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            navigation: NavigationState::INITIAL,
            checked: false,
        }
    }

    /// Returns the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the cell grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    /// Returns the navigation state.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Returns `true` while evaluations from the last check are on display.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Derives the clue lists.
    #[must_use]
    pub fn clue_index(&self) -> ClueIndex<'_> {
        self.puzzle.clue_index()
    }

    /// Returns the highlighted word.
    #[must_use]
    pub fn active_word(&self) -> Option<&Word> {
        self.navigation
            .active_word()
            .and_then(|id| self.puzzle.word(id))
    }

    /// Returns `true` if `entry` is the clue of the highlighted word.
    #[must_use]
    pub fn is_active_clue(&self, entry: &ClueEntry<'_>) -> bool {
        self.navigation.active_word() == Some(entry.word_id())
            && self.navigation.direction() == entry.direction()
    }

    /// Returns `true` if `pos` belongs to the highlighted word.
    #[must_use]
    pub fn is_in_active_word(&self, pos: Position) -> bool {
        self.active_word()
            .is_some_and(|word| word.index_of(pos).is_some())
    }

    /// Applies a navigation event.
    pub fn handle(&mut self, event: NavEvent) -> Transition {
        let transition = navigation::transition(self.navigation, event, &self.puzzle);
        if transition.state == self.navigation {
            log::debug!("{event:?} left navigation unchanged");
        }
        self.navigation = transition.state;
        transition
    }

    /// Enters raw text input into the cell at `pos`.
    ///
    /// The input is normalized by [`entry::normalize_input`]. When a letter is
    /// entered on the highlighted word, the cursor advances to the next
    /// writable cell of that word unless `options` say otherwise; the returned
    /// outcome carries the position to focus.
    ///
    /// Changing a cell while the puzzle is checked clears that cell's
    /// evaluation and leaves the checked state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::NotWritable`] if `pos`
    /// cannot hold a letter, and [`GameError::InvalidCharacter`] if the input
    /// does not start with a letter.
    pub fn enter(
        &mut self,
        pos: Position,
        input: &str,
        options: &EntryOptions,
    ) -> Result<EntryOutcome, GameError> {
        let cell = self
            .puzzle
            .grid()
            .get(pos)
            .ok_or(GameError::OutOfBounds { position: pos })?;
        if !cell.is_writable() {
            return Err(GameError::NotWritable { position: pos });
        }
        let value = entry::normalize_input(input)?;

        let operation = match value {
            _ if cell.value() == value => EntryOperation::NoOp,
            Some(_) => EntryOperation::Set,
            None => EntryOperation::Cleared,
        };

        if !operation.is_no_op() {
            let checked = self.checked;
            let cell = &mut self.puzzle.grid_mut()[pos];
            let not_writable = |_| GameError::NotWritable { position: pos };
            cell.set_value(value).map_err(not_writable)?;
            if checked {
                cell.set_evaluation(None).map_err(not_writable)?;
                self.checked = false;
            }
        }

        let focus = if value.is_some() && options.advance_policy.is_advance() {
            self.advance_from(pos)
        } else {
            None
        };
        Ok(EntryOutcome { operation, focus })
    }

    fn advance_from(&mut self, pos: Position) -> Option<Position> {
        self.navigation.active_cell()?;
        let word = self.active_word()?;
        let next = entry::next_in_word(self.grid(), word, pos)?;
        // Overlapping words of the same direction may own `next`; the word stays.
        self.navigation = self.navigation.advanced_to(next);
        Some(next)
    }

    /// Handles the Backspace key.
    ///
    /// A filled active cell is cleared in place. An empty one hands over to
    /// navigation, which steps back along the active direction.
    pub fn backspace(&mut self) -> Transition {
        let filled = self
            .navigation
            .active_cell()
            .filter(|&pos| self.grid().get(pos).is_some_and(|cell| !cell.is_empty()));
        let Some(pos) = filled else {
            return self.handle(NavEvent::Backspace);
        };
        if let Err(e) = self.enter(pos, "", &EntryOptions::default()) {
            log::warn!("failed to clear active cell {pos}: {e}");
        }
        Transition {
            state: self.navigation,
            focus: None,
            prevent_default: true,
        }
    }

    /// Checks every writable cell and shows the evaluations.
    pub fn check(&mut self) -> CheckReport {
        let CheckOutcome { grid, report } = check::check(self.puzzle.grid());
        *self.puzzle.grid_mut() = grid;
        self.checked = true;
        log::info!(
            "checked answers: {}/{} correct, solved: {}",
            report.correct,
            report.total,
            report.solved,
        );
        report
    }

    /// Returns `true` if every writable cell holds its solution.
    ///
    /// Unlike [`Game::check`], this does not touch evaluations.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid()
            .iter()
            .filter_map(|(_, cell)| check::evaluate(cell))
            .all(|evaluation| evaluation.is_correct())
    }
}
