use crossword_core::Position;

/// Errors that can occur when entering letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {position} is outside the grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
    },
    /// The cell is not part of any word.
    #[display("cell {position} is not part of any word")]
    NotWritable {
        /// The rejected position.
        position: Position,
    },
    /// The input does not start with a letter.
    #[display("{character:?} is not a letter")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
}
