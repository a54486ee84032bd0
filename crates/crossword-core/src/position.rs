//! Grid coordinates.

use crate::Direction;

/// A cell position on the grid, as (row, column), both 0-indexed.
///
/// Positions are unbounded on their own; use [`GridSize::contains`] to check
/// whether a position lies on a particular grid. Neighbour steps return `None`
/// instead of wrapping when a coordinate would leave the `usize` range.
///
/// [`GridSize::contains`]: crate::GridSize::contains
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.forward(Direction::Across), Some(Position::new(2, 4)));
/// assert_eq!(pos.backward(Direction::Down), Some(Position::new(1, 3)));
/// assert_eq!(Position::new(0, 0).up(), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position one row up.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.row.checked_sub(1)?, self.col))
    }

    /// Returns the position one row down.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        Some(Self::new(self.row.checked_add(1)?, self.col))
    }

    /// Returns the position one column left.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_sub(1)?))
    }

    /// Returns the position one column right.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_add(1)?))
    }

    /// Returns the next position in reading order for `direction`.
    #[must_use]
    pub fn forward(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.right(),
            Direction::Down => self.down(),
        }
    }

    /// Returns the previous position in reading order for `direction`.
    #[must_use]
    pub fn backward(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.left(),
            Direction::Down => self.up(),
        }
    }

    /// Returns the position `n` steps forward along `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction, n: usize) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_add(n)?)),
            Direction::Down => Some(Self::new(self.row.checked_add(n)?, self.col)),
        }
    }

    /// Returns how many steps `self` lies forward of `origin` along `direction`.
    ///
    /// Returns `None` if `self` is not on the line starting at `origin`, or lies
    /// before it.
    #[must_use]
    pub fn distance_from(self, origin: Self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Across if self.row == origin.row => self.col.checked_sub(origin.col),
            Direction::Down if self.col == origin.col => self.row.checked_sub(origin.row),
            _ => None,
        }
    }
}
