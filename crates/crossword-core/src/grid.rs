//! Grid dimensions and the cell matrix.

use std::ops::{Index, IndexMut};

use crate::{Cell, Position};

/// The dimensions of a crossword grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{rows}x{cols}")]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Creates a new grid size.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the total number of cells, or `None` if it overflows `usize`.
    #[must_use]
    pub const fn checked_area(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns the total number of cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Sizes read from a payload are
    /// capped at [`MAX_GRID_DIMENSION`](crate::MAX_GRID_DIMENSION) per side.
    #[must_use]
    pub const fn area(self) -> usize {
        match self.checked_area() {
            Some(area) => area,
            None => panic!("grid area overflows usize"),
        }
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Clamps `pos` to the nearest position inside the grid.
    ///
    /// Returns `None` for an empty grid.
    #[must_use]
    pub fn clamp(self, pos: Position) -> Option<Position> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        Some(Position::new(
            pos.row().min(self.rows - 1),
            pos.col().min(self.cols - 1),
        ))
    }

    /// Returns all positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    fn linear(self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }
}

/// A rectangular matrix of [`Cell`]s, stored row-major.
///
/// Dimensions are fixed at construction. Grids are produced by the
/// [`builder`](crate::builder) and rebuilt, never resized, when a new puzzle is
/// loaded.
///
/// Indexing with a position outside the grid panics; use [`Grid::get`] for a
/// checked lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn blank(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.area()],
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.size.linear(pos).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the cell at `pos`.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.size.linear(pos).map(|i| &mut self.cells[i])
    }

    /// Returns the cell at `pos` if it exists and is writable.
    #[must_use]
    pub fn writable(&self, pos: Position) -> Option<&Cell> {
        self.get(pos).filter(|cell| cell.is_writable())
    }

    /// Returns `true` if `pos` is inside the grid and writable.
    #[must_use]
    pub fn is_writable(&self, pos: Position) -> bool {
        self.writable(pos).is_some()
    }

    /// Iterates over all cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.size.positions().zip(&self.cells)
    }

    /// Iterates mutably over all cells with their positions in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut Cell)> {
        self.size.positions().zip(&mut self.cells)
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `chunks` rejects a zero chunk size.
        self.cells.chunks(self.size.cols.max(1))
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        self.get(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside the {} grid", self.size))
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let size = self.size;
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside the {size} grid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_clamp() {
        let size = GridSize::new(3, 4);
        assert!(size.contains(Position::new(2, 3)));
        assert!(!size.contains(Position::new(3, 0)));
        assert!(!size.contains(Position::new(0, 4)));
        assert_eq!(
            size.clamp(Position::new(10, 1)),
            Some(Position::new(2, 1))
        );
        assert_eq!(GridSize::new(0, 4).clamp(Position::new(0, 0)), None);
    }

    #[test]
    fn test_area() {
        assert_eq!(GridSize::new(3, 4).area(), 12);
        assert_eq!(GridSize::new(0, 4).area(), 0);
        assert_eq!(GridSize::new(usize::MAX, 2).checked_area(), None);
    }

    #[test]
    #[should_panic(expected = "grid area overflows usize")]
    fn test_area_overflow_panics() {
        let _ = GridSize::new(usize::MAX, 2).area();
    }

    #[test]
    fn test_positions_are_row_major() {
        let positions: Vec<_> = GridSize::new(2, 2).positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_blank_grid() {
        let grid = Grid::blank(GridSize::new(2, 3));
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.rows().all(|row| row.len() == 3));
        assert!(grid.iter().all(|(_, cell)| !cell.is_writable()));
        assert!(grid.get(Position::new(2, 0)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::blank(GridSize::new(2, 2));
        let _ = &grid[Position::new(5, 5)];
    }
}
