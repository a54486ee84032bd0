//! Answer checking.

use crossword_core::{Cell, Evaluation, Grid};

/// Evaluates a single cell.
///
/// Non-writable cells have no evaluation. A writable cell is correct only if
/// its value equals the solution; an empty cell is incorrect.
#[must_use]
pub fn evaluate(cell: &Cell) -> Option<Evaluation> {
    if !cell.is_writable() {
        return None;
    }
    match cell.value() {
        Some(value) if Some(value) == cell.solution() => Some(Evaluation::Correct),
        _ => Some(Evaluation::Incorrect),
    }
}

/// Counts from one answer check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// `true` if every writable cell is correct.
    pub solved: bool,
    /// Number of correct cells.
    pub correct: usize,
    /// Number of incorrect (including empty) cells.
    pub incorrect: usize,
    /// Number of writable cells.
    pub total: usize,
}

/// The checked grid together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// A copy of the input grid with every writable cell evaluated.
    pub grid: Grid,
    /// Summary counts.
    pub report: CheckReport,
}

/// Evaluates every writable cell of `grid`.
///
/// The input is left untouched. Checking the returned grid again yields the
/// same result.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Evaluation, GridSize, Position, Puzzle, WordPlacement};
/// use crossword_game::check::check;
///
/// let mut puzzle = Puzzle::build(
///     GridSize::new(1, 2),
///     [WordPlacement::new("HI", "Greeting", Direction::Across, Position::new(0, 0))],
/// );
/// puzzle.grid_mut()[Position::new(0, 0)].set_value(Some('H')).unwrap();
///
/// let outcome = check(puzzle.grid());
/// assert!(!outcome.report.solved);
/// assert_eq!(outcome.grid[Position::new(0, 0)].evaluation(), Some(Evaluation::Correct));
/// assert_eq!(outcome.grid[Position::new(0, 1)].evaluation(), Some(Evaluation::Incorrect));
/// ```
#[must_use]
pub fn check(grid: &Grid) -> CheckOutcome {
    let mut grid = grid.clone();
    let mut report = CheckReport::default();
    for (_, cell) in grid.iter_mut() {
        let Some(evaluation) = evaluate(cell) else {
            continue;
        };
        report.total += 1;
        match evaluation {
            Evaluation::Correct => report.correct += 1,
            Evaluation::Incorrect => report.incorrect += 1,
        }
        // Cannot fail: `evaluate` only returns `Some` for writable cells.
        let _ = cell.set_evaluation(Some(evaluation));
    }
    report.solved = report.incorrect == 0;
    CheckOutcome { grid, report }
}
