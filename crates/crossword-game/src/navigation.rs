//! Cursor, direction, and active-word state machine.
//!
//! [`transition`] is a pure function from the current [`NavigationState`], an
//! input [`NavEvent`], and the puzzle to the next state. It never touches the
//! UI; instead the returned [`Transition`] carries the position the host should
//! move input focus to, and whether the host should suppress the key's default
//! behaviour.

use crossword_core::{Cell, Direction, Grid, GridSize, Position, Puzzle, WordId};

/// The active cell, direction, and word.
///
/// Invariants, maintained by [`transition`]:
/// - an active cell is always writable;
/// - an active word contains the active cell and runs in the active direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    active_cell: Option<Position>,
    direction: Direction,
    active_word: Option<WordId>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl NavigationState {
    /// No active cell, across, no active word.
    pub const INITIAL: Self = Self {
        active_cell: None,
        direction: Direction::Across,
        active_word: None,
    };

    fn at(cell: Position, direction: Direction, word: Option<WordId>) -> Self {
        Self {
            active_cell: Some(cell),
            direction,
            active_word: word,
        }
    }

    /// Moves the cursor to `cell` of the active word, keeping direction and word.
    pub(crate) fn advanced_to(self, cell: Position) -> Self {
        Self::at(cell, self.direction, self.active_word)
    }

    fn cleared(self) -> Self {
        Self {
            active_cell: None,
            active_word: None,
            ..self
        }
    }

    /// Returns the cell receiving input.
    #[must_use]
    pub fn active_cell(&self) -> Option<Position> {
        self.active_cell
    }

    /// Returns the active direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the highlighted word.
    #[must_use]
    pub fn active_word(&self) -> Option<WordId> {
        self.active_word
    }

    /// Checks the state invariants against `puzzle`.
    #[must_use]
    pub fn is_consistent_with(&self, puzzle: &Puzzle) -> bool {
        let cell_ok = self
            .active_cell
            .is_none_or(|pos| puzzle.grid().is_writable(pos));
        let word_ok = self.active_word.is_none_or(|id| {
            puzzle.word(id).is_some_and(|word| {
                word.direction() == self.direction
                    && self
                        .active_cell
                        .is_some_and(|pos| word.index_of(pos).is_some())
            })
        });
        cell_ok && word_ok
    }
}

/// An arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl MoveDirection {
    /// The arrow that steps backwards along `direction`.
    #[must_use]
    pub const fn backward(direction: Direction) -> Self {
        match direction {
            Direction::Across => Self::Left,
            Direction::Down => Self::Up,
        }
    }

    /// Steps one cell from `pos`, staying inside a grid of `size`.
    #[must_use]
    pub fn apply_to(self, pos: Position, size: GridSize) -> Position {
        let next = match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        };
        next.and_then(|next| size.clamp(next)).unwrap_or(pos)
    }
}

/// A user input that affects navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Pointer click on a cell.
    Activate(Position),
    /// Input focus moved to a cell by the host (for example native tabbing).
    Focus(Position),
    /// Arrow key.
    Move(MoveDirection),
    /// Backspace. Only navigates when the active cell is empty.
    Backspace,
    /// Tab or Enter: switch direction on a crossing cell.
    ToggleDirection,
    /// A clue in the clue list was chosen.
    SelectClue {
        /// The word the clue belongs to.
        word: WordId,
        /// The list the clue was chosen from.
        direction: Direction,
    },
}

/// The result of applying a [`NavEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// The next navigation state.
    pub state: NavigationState,
    /// The cell the host should move input focus to, if any.
    pub focus: Option<Position>,
    /// Whether the host should suppress the key's default action.
    pub prevent_default: bool,
}

impl Transition {
    fn stay(state: NavigationState) -> Self {
        Self {
            state,
            focus: None,
            prevent_default: false,
        }
    }

    fn focus(state: NavigationState, pos: Position) -> Self {
        Self {
            state,
            focus: Some(pos),
            prevent_default: false,
        }
    }

    fn prevent_default(self) -> Self {
        Self {
            prevent_default: true,
            ..self
        }
    }
}

/// Computes the next navigation state for `event`.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, GridSize, Position, Puzzle, WordPlacement};
/// use crossword_game::{NavEvent, NavigationState, navigation::transition};
///
/// let puzzle = Puzzle::build(
///     GridSize::new(5, 5),
///     [
///         WordPlacement::new("CAT", "Feline", Direction::Across, Position::new(0, 0)),
///         WordPlacement::new("COW", "Farm animal", Direction::Down, Position::new(0, 0)),
///     ],
/// );
///
/// let corner = Position::new(0, 0);
/// let first = transition(NavigationState::INITIAL, NavEvent::Activate(corner), &puzzle);
/// assert_eq!(first.state.direction(), Direction::Across);
/// assert_eq!(first.focus, Some(corner));
///
/// let second = transition(first.state, NavEvent::Activate(corner), &puzzle);
/// assert_eq!(second.state.direction(), Direction::Down);
/// ```
pub fn transition(state: NavigationState, event: NavEvent, puzzle: &Puzzle) -> Transition {
    let grid = puzzle.grid();
    match event {
        NavEvent::Activate(pos) => activate(state, pos, grid),
        NavEvent::Focus(pos) => focus(state, pos, grid),
        NavEvent::Move(arrow) => {
            let Some(current) = state.active_cell else {
                return Transition::stay(state);
            };
            commit_move(state, arrow.apply_to(current, grid.size()), grid).prevent_default()
        }
        NavEvent::Backspace => backspace(state, grid),
        NavEvent::ToggleDirection => toggle_direction(state, grid),
        NavEvent::SelectClue { word, direction } => select_clue(state, word, direction, puzzle),
    }
}

/// Activates `pos`, keeping the current direction if `cell` supports it.
fn settle(state: NavigationState, pos: Position, cell: &Cell) -> NavigationState {
    match cell.preferred_word(state.direction) {
        Some((direction, word)) => NavigationState::at(pos, direction, Some(word)),
        None => NavigationState::at(pos, state.direction, None),
    }
}

fn activate(state: NavigationState, pos: Position, grid: &Grid) -> Transition {
    let Some(cell) = grid.writable(pos) else {
        return Transition::stay(state.cleared());
    };
    if state.active_cell == Some(pos) && cell.is_crossing() {
        let direction = state.direction.toggled();
        return Transition::focus(NavigationState::at(pos, direction, cell.word(direction)), pos);
    }
    Transition::focus(settle(state, pos, cell), pos)
}

fn focus(state: NavigationState, pos: Position, grid: &Grid) -> Transition {
    match grid.writable(pos) {
        Some(cell) if state.active_cell != Some(pos) => Transition::stay(NavigationState::at(
            pos,
            state.direction,
            cell.word(state.direction),
        )),
        _ => Transition::stay(state),
    }
}

fn commit_move(state: NavigationState, target: Position, grid: &Grid) -> Transition {
    match grid.writable(target) {
        Some(cell) => Transition::focus(settle(state, target, cell), target),
        None => Transition::stay(state),
    }
}

fn backspace(state: NavigationState, grid: &Grid) -> Transition {
    let Some(current) = state.active_cell else {
        return Transition::stay(state);
    };
    if grid.get(current).is_some_and(|cell| !cell.is_empty()) {
        return Transition::stay(state);
    }
    let target = MoveDirection::backward(state.direction).apply_to(current, grid.size());
    commit_move(state, target, grid).prevent_default()
}

fn toggle_direction(state: NavigationState, grid: &Grid) -> Transition {
    let Some(current) = state.active_cell else {
        return Transition::stay(state);
    };
    match grid.writable(current) {
        Some(cell) if cell.is_crossing() => {
            let direction = state.direction.toggled();
            Transition::focus(
                NavigationState::at(current, direction, cell.word(direction)),
                current,
            )
            .prevent_default()
        }
        _ => Transition::stay(state).prevent_default(),
    }
}

fn select_clue(
    state: NavigationState,
    id: WordId,
    direction: Direction,
    puzzle: &Puzzle,
) -> Transition {
    let Some(word) = puzzle.word(id) else {
        log::debug!("ignoring selection of unknown word {id}");
        return Transition::stay(state);
    };
    if word.direction() != direction {
        log::debug!(
            "word {id} was selected from the {direction} list but runs {}",
            word.direction()
        );
    }
    let start = word.start();
    if !puzzle.grid().is_writable(start) {
        log::debug!("word {id} starts outside the grid at {start}");
        return Transition::stay(state);
    }
    Transition::focus(NavigationState::at(start, word.direction(), Some(id)), start)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{ACROSS_CAT, DOWN_COW, DOWN_TOE, cat_cow_toe};

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn run(puzzle: &Puzzle, events: &[NavEvent]) -> Transition {
        let mut t = Transition::stay(NavigationState::INITIAL);
        for &event in events {
            t = transition(t.state, event, puzzle);
            assert!(t.state.is_consistent_with(puzzle), "after {event:?}: {t:?}");
        }
        t
    }

    #[test]
    fn test_activate_prefers_current_direction() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(1, 0))]);
        assert_eq!(t.state.active_cell(), Some(at(1, 0)));
        assert_eq!(t.state.direction(), Direction::Down);
        assert_eq!(t.state.active_word(), Some(DOWN_COW));
        assert_eq!(t.focus, Some(at(1, 0)));

        // Down is kept on a crossing cell.
        let t = transition(t.state, NavEvent::Activate(at(0, 2)), &puzzle);
        assert_eq!(t.state.direction(), Direction::Down);
        assert_eq!(t.state.active_word(), Some(DOWN_TOE));

        // Falls back to across when down is unavailable.
        let t = transition(t.state, NavEvent::Activate(at(0, 1)), &puzzle);
        assert_eq!(t.state.direction(), Direction::Across);
        assert_eq!(t.state.active_word(), Some(ACROSS_CAT));
    }

    #[test]
    fn test_double_click_crossing_toggles() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 0))]);
        assert_eq!(t.state.direction(), Direction::Across);
        assert_eq!(t.state.active_word(), Some(ACROSS_CAT));

        let t = transition(t.state, NavEvent::Activate(at(0, 0)), &puzzle);
        assert_eq!(t.state.direction(), Direction::Down);
        assert_eq!(t.state.active_word(), Some(DOWN_COW));
        assert_eq!(t.focus, Some(at(0, 0)));

        let t = transition(t.state, NavEvent::Activate(at(0, 0)), &puzzle);
        assert_eq!(t.state.direction(), Direction::Across);
    }

    #[test]
    fn test_double_click_plain_cell_keeps_state() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 1))]);
        let again = transition(t.state, NavEvent::Activate(at(0, 1)), &puzzle);
        assert_eq!(again.state, t.state);
        assert_eq!(again.focus, Some(at(0, 1)));
    }

    #[test]
    fn test_click_block_clears_but_keeps_direction() {
        let puzzle = cat_cow_toe();
        let t = run(
            &puzzle,
            &[NavEvent::Activate(at(1, 0)), NavEvent::Activate(at(1, 1))],
        );
        assert_eq!(t.state.active_cell(), None);
        assert_eq!(t.state.active_word(), None);
        assert_eq!(t.state.direction(), Direction::Down);
        assert_eq!(t.focus, None);

        let t = transition(t.state, NavEvent::Activate(at(40, 40)), &puzzle);
        assert_eq!(t.state.active_cell(), None);
    }

    #[test]
    fn test_arrow_moves_and_recomputes_word() {
        let puzzle = cat_cow_toe();
        let t = run(
            &puzzle,
            &[
                NavEvent::Activate(at(0, 1)),
                NavEvent::Move(MoveDirection::Left),
            ],
        );
        assert_eq!(t.state.active_cell(), Some(at(0, 0)));
        assert_eq!(t.state.active_word(), Some(ACROSS_CAT));
        assert_eq!(t.focus, Some(at(0, 0)));
        assert!(t.prevent_default);

        // Across is unavailable below the corner, so direction follows the cell.
        let t = transition(t.state, NavEvent::Move(MoveDirection::Down), &puzzle);
        assert_eq!(t.state.active_cell(), Some(at(1, 0)));
        assert_eq!(t.state.direction(), Direction::Down);
        assert_eq!(t.state.active_word(), Some(DOWN_COW));
    }

    #[test]
    fn test_arrow_into_block_is_noop() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(1, 0))]);
        let moved = transition(t.state, NavEvent::Move(MoveDirection::Right), &puzzle);
        assert_eq!(moved.state, t.state);
        assert_eq!(moved.focus, None);
        assert!(moved.prevent_default);
    }

    #[test]
    fn test_arrow_clamps_at_edge() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 1))]);
        let moved = transition(t.state, NavEvent::Move(MoveDirection::Up), &puzzle);
        assert_eq!(moved.state, t.state);
        assert_eq!(moved.focus, Some(at(0, 1)));
    }

    #[test]
    fn test_events_without_active_cell_are_ignored() {
        let puzzle = cat_cow_toe();
        for event in [
            NavEvent::Move(MoveDirection::Right),
            NavEvent::Backspace,
            NavEvent::ToggleDirection,
        ] {
            let t = transition(NavigationState::INITIAL, event, &puzzle);
            assert_eq!(t.state, NavigationState::INITIAL);
            assert_eq!(t.focus, None);
            assert!(!t.prevent_default);
        }
    }

    #[test]
    fn test_backspace_on_empty_cell_steps_back() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 2))]);
        assert_eq!(t.state.direction(), Direction::Across);

        let t = transition(t.state, NavEvent::Backspace, &puzzle);
        assert_eq!(t.state.active_cell(), Some(at(0, 1)));
        assert_eq!(t.state.active_word(), Some(ACROSS_CAT));
        assert_eq!(t.focus, Some(at(0, 1)));
        assert!(t.prevent_default);
    }

    #[test]
    fn test_backspace_on_filled_cell_does_not_move() {
        let mut puzzle = cat_cow_toe();
        puzzle.grid_mut()[at(0, 1)].set_value(Some('A')).unwrap();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 1))]);
        let after = transition(t.state, NavEvent::Backspace, &puzzle);
        assert_eq!(after.state, t.state);
        assert!(!after.prevent_default);
    }

    #[test]
    fn test_backspace_at_word_start_clamps() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 0))]);
        let after = transition(t.state, NavEvent::Backspace, &puzzle);
        assert_eq!(after.state.active_cell(), Some(at(0, 0)));
    }

    #[test]
    fn test_toggle_direction() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(0, 2))]);
        let toggled = transition(t.state, NavEvent::ToggleDirection, &puzzle);
        assert_eq!(toggled.state.direction(), Direction::Down);
        assert_eq!(toggled.state.active_word(), Some(DOWN_TOE));
        assert_eq!(toggled.focus, Some(at(0, 2)));
        assert!(toggled.prevent_default);

        let plain = transition(
            toggled.state,
            NavEvent::Activate(at(1, 2)),
            &puzzle,
        );
        let untouched = transition(plain.state, NavEvent::ToggleDirection, &puzzle);
        assert_eq!(untouched.state, plain.state);
        assert_eq!(untouched.focus, None);
        assert!(untouched.prevent_default);
    }

    #[test]
    fn test_select_clue() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(2, 2))]);
        let selected = transition(
            t.state,
            NavEvent::SelectClue {
                word: ACROSS_CAT,
                direction: Direction::Across,
            },
            &puzzle,
        );
        assert_eq!(selected.state.active_cell(), Some(at(0, 0)));
        assert_eq!(selected.state.direction(), Direction::Across);
        assert_eq!(selected.state.active_word(), Some(ACROSS_CAT));
        assert_eq!(selected.focus, Some(at(0, 0)));

        let unknown = transition(
            selected.state,
            NavEvent::SelectClue {
                word: WordId::new(99),
                direction: Direction::Down,
            },
            &puzzle,
        );
        assert_eq!(unknown.state, selected.state);
    }

    #[test]
    fn test_select_clue_uses_word_direction() {
        let puzzle = cat_cow_toe();
        let t = transition(
            NavigationState::INITIAL,
            NavEvent::SelectClue {
                word: DOWN_TOE,
                direction: Direction::Across,
            },
            &puzzle,
        );
        assert_eq!(t.state.direction(), Direction::Down);
        assert!(t.state.is_consistent_with(&puzzle));
    }

    #[test]
    fn test_focus_keeps_direction() {
        let puzzle = cat_cow_toe();
        let t = run(&puzzle, &[NavEvent::Activate(at(1, 0))]);
        let focused = transition(t.state, NavEvent::Focus(at(0, 1)), &puzzle);
        assert_eq!(focused.state.active_cell(), Some(at(0, 1)));
        assert_eq!(focused.state.direction(), Direction::Down);
        assert_eq!(focused.state.active_word(), None);
        assert_eq!(focused.focus, None);

        let blocked = transition(focused.state, NavEvent::Focus(at(1, 1)), &puzzle);
        assert_eq!(blocked.state, focused.state);
    }

    fn event_strategy() -> impl Strategy<Value = NavEvent> {
        let pos = (0..6_usize, 0..6_usize).prop_map(|(r, c)| Position::new(r, c));
        prop_oneof![
            pos.clone().prop_map(NavEvent::Activate),
            pos.prop_map(NavEvent::Focus),
            prop_oneof![
                Just(MoveDirection::Up),
                Just(MoveDirection::Down),
                Just(MoveDirection::Left),
                Just(MoveDirection::Right),
            ]
            .prop_map(NavEvent::Move),
            Just(NavEvent::Backspace),
            Just(NavEvent::ToggleDirection),
            (0..4_usize, prop_oneof![Just(Direction::Across), Just(Direction::Down)]).prop_map(
                |(word, direction)| NavEvent::SelectClue {
                    word: WordId::new(word),
                    direction,
                }
            ),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(events in prop::collection::vec(event_strategy(), 0..40)) {
            let puzzle = cat_cow_toe();
            let mut state = NavigationState::INITIAL;
            for event in events {
                let t = transition(state, event, &puzzle);
                prop_assert!(t.state.is_consistent_with(&puzzle));
                if let Some(pos) = t.focus {
                    prop_assert_eq!(t.state.active_cell(), Some(pos));
                }
                state = t.state;
            }
        }
    }
}
