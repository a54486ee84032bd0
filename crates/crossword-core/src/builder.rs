//! Grid construction from word placements.
//!
//! Building happens once per puzzle load: placements are numbered in input
//! order, then each word writes its letters into the cell matrix. The result
//! depends only on the input; nothing is carried over between builds.

use std::collections::HashMap;

use crate::{Grid, GridSize, Position, Word, WordId, WordPlacement, WordRegistry};

/// Builds the cell matrix and word registry for a puzzle.
///
/// - Display numbers are assigned in input order, starting at 1. Words whose
///   start positions coincide share one number.
/// - Every in-bounds letter marks its cell writable, sets the solution, and
///   records the word id in the slot for the word's direction.
/// - Letters outside the grid are skipped.
/// - If two words write the same cell, the later word's letter wins.
///
/// # Panics
///
/// Panics if the cell count of `size` overflows `usize` (see [`GridSize::area`]).
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, GridSize, Position, WordPlacement, builder};
///
/// let (grid, words) = builder::build(
///     GridSize::new(4, 4),
///     [
///         WordPlacement::new("TOP", "Summit", Direction::Across, Position::new(0, 0)),
///         WordPlacement::new("TEA", "Brew", Direction::Down, Position::new(0, 0)),
///         WordPlacement::new("PAN", "Skillet", Direction::Down, Position::new(0, 2)),
///     ],
/// );
///
/// assert_eq!(words.len(), 3);
/// assert_eq!(grid[Position::new(0, 2)].clue_number(), Some(2));
/// assert!(!grid[Position::new(1, 1)].is_writable());
/// ```
#[must_use]
pub fn build(
    size: GridSize,
    placements: impl IntoIterator<Item = WordPlacement>,
) -> (Grid, WordRegistry) {
    let (words, start_numbers) = number_words(placements);

    let mut grid = Grid::blank(size);
    for word in &words {
        let mut truncated = 0_usize;
        for (pos, letter) in word.placement().letters() {
            match grid.get_mut(pos) {
                Some(cell) => cell.assign(word.direction(), word.id(), letter),
                None => truncated += 1,
            }
        }
        // `letters` stops early on coordinate overflow.
        truncated += word.len() - word.placement().letters().count();
        if truncated > 0 {
            log::debug!(
                "word {} {:?} extends past the {size} grid, {truncated} letter(s) dropped",
                word.id(),
                word.text(),
            );
        }
    }

    for (pos, number) in start_numbers {
        if let Some(cell) = grid.get_mut(pos) {
            cell.set_clue_number(number);
        }
    }

    (grid, WordRegistry::from_words(words))
}

fn number_words(
    placements: impl IntoIterator<Item = WordPlacement>,
) -> (Vec<Word>, HashMap<Position, u32>) {
    let mut next_number = 1;
    let mut start_numbers = HashMap::new();
    let words = placements
        .into_iter()
        .enumerate()
        .map(|(index, placement)| {
            let number = *start_numbers.entry(placement.start()).or_insert_with(|| {
                let number = next_number;
                next_number += 1;
                number
            });
            Word::new(WordId::new(index), number, placement)
        })
        .collect();
    (words, start_numbers)
}
