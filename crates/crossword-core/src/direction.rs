//! Word orientation.

use std::str::FromStr;

/// The orientation of a word on the grid.
///
/// Across words run left to right (column increasing), down words run top to
/// bottom (row increasing).
///
/// # Examples
///
/// ```
/// use crossword_core::Direction;
///
/// assert_eq!(Direction::Across.toggled(), Direction::Down);
/// assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
/// assert_eq!(Direction::Across.to_string(), "Across");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right.
    #[default]
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

/// Error returned when parsing a [`Direction`] from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction {input:?}, expected ACROSS or DOWN")]
pub struct ParseDirectionError {
    input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("across") {
            Ok(Self::Across)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Self::Down)
        } else {
            Err(ParseDirectionError {
                input: s.to_owned(),
            })
        }
    }
}
