//! Core data structures for crossword applications.
//!
//! This crate turns a flat list of word placements into a navigable grid model.
//! The structures are shared by the interaction engine and any front end that
//! renders a puzzle.
//!
//! # Overview
//!
//! The crate is organized around three groups of types:
//!
//! 1. **Geometry** - Where things are on the board
//!    - [`direction`]: The two word orientations, across and down
//!    - [`position`]: Row/column coordinates with checked neighbour steps
//!    - [`grid`]: Grid dimensions and the row-major cell matrix
//!
//! 2. **Words and cells** - What the board is made of
//!    - [`word`]: Input placements, numbered words, and the word registry
//!    - [`cell`]: Per-cell solution, player value, numbering, and word membership
//!
//! 3. **Derivation** - Building and viewing a puzzle
//!    - [`builder`]: Converts placements into a grid and word registry
//!    - [`clue_index`]: Across/down clue lists ordered by display number
//!    - [`puzzle`]: A built puzzle bundling theme, grid, and words
//!    - [`payload`]: The provider data contract and its validation
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Direction, GridSize, Position, Puzzle, WordPlacement};
//!
//! let puzzle = Puzzle::build(
//!     GridSize::new(5, 5),
//!     [
//!         WordPlacement::new("cat", "Feline", Direction::Across, Position::new(0, 0)),
//!         WordPlacement::new("cow", "Farm animal", Direction::Down, Position::new(0, 0)),
//!     ],
//! );
//!
//! let corner = &puzzle.grid()[Position::new(0, 0)];
//! assert!(corner.is_crossing());
//! assert_eq!(corner.clue_number(), Some(1));
//! assert_eq!(puzzle.clue_index().across()[0].to_string(), "1. Feline (3)");
//! ```

pub mod builder;
pub mod cell;
pub mod clue_index;
pub mod direction;
pub mod grid;
pub mod payload;
pub mod position;
pub mod puzzle;
pub mod word;

// Re-export commonly used types
pub use self::{
    cell::{Cell, CellError, Evaluation},
    clue_index::{ClueEntry, ClueIndex},
    direction::{Direction, ParseDirectionError},
    grid::{Grid, GridSize},
    payload::{MAX_GRID_DIMENSION, PayloadError, PuzzlePayload, strip_code_fence},
    position::Position,
    puzzle::Puzzle,
    word::{Word, WordId, WordPlacement, WordRegistry},
};
