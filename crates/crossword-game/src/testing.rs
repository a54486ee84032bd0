//! Shared puzzle fixtures.

use crossword_core::{Direction, GridSize, Position, Puzzle, WordId, WordPlacement};

pub(crate) const ACROSS_CAT: WordId = WordId::new(0);
pub(crate) const DOWN_COW: WordId = WordId::new(1);
pub(crate) const DOWN_TOE: WordId = WordId::new(2);

/// ```text
/// C A T . .
/// O . O . .
/// W . E . .
/// . . . . .
/// . . . . .
/// ```
pub(crate) fn cat_cow_toe() -> Puzzle {
    Puzzle::build(
        GridSize::new(5, 5),
        [
            WordPlacement::new("CAT", "Feline", Direction::Across, Position::new(0, 0)),
            WordPlacement::new("COW", "Farm animal", Direction::Down, Position::new(0, 0)),
            WordPlacement::new("TOE", "Foot digit", Direction::Down, Position::new(0, 2)),
        ],
    )
}
