//! The data contract between a puzzle provider and the engine.
//!
//! Providers (for example a generative text service) return JSON of the form
//!
//! ```json
//! {
//!   "theme": "GENERAL KNOWLEDGE",
//!   "gridSize": { "rows": 15, "cols": 15 },
//!   "words": [
//!     { "word": "STRING", "clue": "Clue", "direction": "ACROSS", "startRow": 0, "startCol": 0 }
//!   ]
//! }
//! ```
//!
//! Fields are optional at the serde level so that a missing piece surfaces as a
//! specific [`PayloadError`] from [`PuzzlePayload::validate`] rather than as an
//! opaque parse failure. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::{Direction, GridSize, Position, WordPlacement};

/// Largest accepted number of rows or columns.
pub const MAX_GRID_DIMENSION: usize = 256;

/// Errors raised when provider data is missing or malformed.
///
/// The `Display` output is meant to be shown to the user as-is.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PayloadError {
    /// The text is not valid JSON or does not have the expected shape.
    #[display("malformed puzzle JSON: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// `gridSize` or one of its dimensions is missing.
    #[display("puzzle data is missing gridSize")]
    MissingGridSize,
    /// A dimension is zero, negative, or larger than [`MAX_GRID_DIMENSION`].
    #[display("grid size {rows}x{cols} is out of range (1..={})", MAX_GRID_DIMENSION)]
    InvalidGridSize {
        /// Requested rows.
        rows: i64,
        /// Requested columns.
        cols: i64,
    },
    /// The `words` array is missing.
    #[display("puzzle data is missing the words array")]
    MissingWords,
    /// A word lacks a required field, or the field is blank.
    #[display("word {index} is missing required field `{field}`")]
    MissingField {
        /// Index of the word in the `words` array.
        index: usize,
        /// JSON name of the missing field.
        field: &'static str,
    },
    /// A word contains characters other than the letters A to Z.
    #[display("word {index} ({word:?}) must contain only letters A-Z")]
    InvalidWord {
        /// Index of the word in the `words` array.
        index: usize,
        /// The offending text.
        word: String,
    },
    /// A word's direction is neither ACROSS nor DOWN.
    #[display("word {index} has unknown direction {direction:?}")]
    InvalidDirection {
        /// Index of the word in the `words` array.
        index: usize,
        /// The offending direction text.
        direction: String,
    },
    /// A word starts at a negative coordinate.
    #[display("word {index} starts at invalid position ({row}, {col})")]
    InvalidStart {
        /// Index of the word in the `words` array.
        index: usize,
        /// Requested start row.
        row: i64,
        /// Requested start column.
        col: i64,
    },
}

/// A provider response, as deserialized from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzlePayload {
    /// Free-form theme of the puzzle.
    #[serde(default)]
    pub theme: Option<String>,
    /// Grid dimensions.
    #[serde(default)]
    pub grid_size: Option<GridSizeDto>,
    /// Word placements, in provider order.
    #[serde(default)]
    pub words: Option<Vec<WordDto>>,
}

/// Grid dimensions as sent by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSizeDto {
    /// Number of rows.
    #[serde(default)]
    pub rows: Option<i64>,
    /// Number of columns.
    #[serde(default)]
    pub cols: Option<i64>,
}

/// One word placement as sent by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDto {
    /// Answer text; letters only, any case.
    #[serde(default)]
    pub word: Option<String>,
    /// Clue text.
    #[serde(default)]
    pub clue: Option<String>,
    /// `ACROSS` or `DOWN`, case-insensitive.
    #[serde(default)]
    pub direction: Option<String>,
    /// 0-indexed start row.
    #[serde(default)]
    pub start_row: Option<i64>,
    /// 0-indexed start column.
    #[serde(default)]
    pub start_col: Option<i64>,
}

impl PuzzlePayload {
    /// Parses a payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses raw provider output, removing a surrounding code fence first.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] if the unfenced text is not a valid payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::PuzzlePayload;
    ///
    /// let text = "```json\n{ \"gridSize\": { \"rows\": 2, \"cols\": 2 }, \"words\": [] }\n```";
    /// let payload = PuzzlePayload::from_provider_text(text).unwrap();
    /// assert!(payload.validate().is_ok());
    /// ```
    pub fn from_provider_text(text: &str) -> Result<Self, PayloadError> {
        Self::from_json(strip_code_fence(text))
    }

    /// Returns the theme, or an empty string if none was sent.
    #[must_use]
    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or_default().trim()
    }

    /// Checks required fields and converts the payload into builder input.
    ///
    /// Word text is uppercased. Placements are not checked against the grid
    /// bounds; the builder truncates words that overflow.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, checking the grid size,
    /// then the word list, then each word in order.
    pub fn validate(&self) -> Result<(GridSize, Vec<WordPlacement>), PayloadError> {
        let size = self
            .grid_size
            .as_ref()
            .ok_or(PayloadError::MissingGridSize)?
            .validate()?;
        let placements = self
            .words
            .as_ref()
            .ok_or(PayloadError::MissingWords)?
            .iter()
            .enumerate()
            .map(|(index, word)| word.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((size, placements))
    }
}

impl GridSizeDto {
    fn validate(&self) -> Result<GridSize, PayloadError> {
        let (Some(rows), Some(cols)) = (self.rows, self.cols) else {
            return Err(PayloadError::MissingGridSize);
        };
        let dimension = |value: i64| {
            usize::try_from(value)
                .ok()
                .filter(|value| (1..=MAX_GRID_DIMENSION).contains(value))
        };
        match (dimension(rows), dimension(cols)) {
            (Some(r), Some(c)) => Ok(GridSize::new(r, c)),
            _ => Err(PayloadError::InvalidGridSize { rows, cols }),
        }
    }
}

impl WordDto {
    fn validate(&self, index: usize) -> Result<WordPlacement, PayloadError> {
        let missing = |field| PayloadError::MissingField { index, field };

        let text = required(self.word.as_deref(), index, "word")?;
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PayloadError::InvalidWord {
                index,
                word: text.to_owned(),
            });
        }
        let clue = required(self.clue.as_deref(), index, "clue")?;
        let direction_text = required(self.direction.as_deref(), index, "direction")?;
        let direction: Direction =
            direction_text
                .parse()
                .map_err(|_| PayloadError::InvalidDirection {
                    index,
                    direction: direction_text.to_owned(),
                })?;
        let row = self.start_row.ok_or_else(|| missing("startRow"))?;
        let col = self.start_col.ok_or_else(|| missing("startCol"))?;
        let (Ok(start_row), Ok(start_col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Err(PayloadError::InvalidStart { index, row, col });
        };

        Ok(WordPlacement::new(
            text,
            clue,
            direction,
            Position::new(start_row, start_col),
        ))
    }
}

fn required<'a>(
    value: Option<&'a str>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, PayloadError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(PayloadError::MissingField { index, field })
}

/// Removes a Markdown code fence wrapped around provider output.
///
/// The opening fence may carry a language tag such as `json`. Text without a
/// complete fence is returned trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use crossword_core::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
/// assert_eq!(strip_code_fence("  {}  "), "{}");
/// ```
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    inner
        .trim_start_matches(|c: char| c.is_alphanumeric() || c == '_')
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "theme": "GENERAL KNOWLEDGE",
        "gridSize": { "rows": 5, "cols": 5 },
        "words": [
            { "word": "Cat", "clue": "Feline", "direction": "ACROSS", "startRow": 0, "startCol": 0 },
            { "word": "COW", "clue": "Farm animal", "direction": "down", "startRow": 0, "startCol": 0 }
        ],
        "extra": true
    }"#;

    fn with_word(word: &str) -> String {
        format!(r#"{{ "gridSize": {{ "rows": 5, "cols": 5 }}, "words": [{word}] }}"#)
    }

    #[test]
    fn test_validate_valid_payload() {
        let payload = PuzzlePayload::from_json(VALID).unwrap();
        assert_eq!(payload.theme(), "GENERAL KNOWLEDGE");
        let (size, placements) = payload.validate().unwrap();
        assert_eq!(size, GridSize::new(5, 5));
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].text(), "CAT");
        assert_eq!(placements[1].direction(), Direction::Down);
    }

    #[test]
    fn test_missing_grid_size() {
        let payload = PuzzlePayload::from_json(r#"{ "words": [] }"#).unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::MissingGridSize)
        ));

        let payload =
            PuzzlePayload::from_json(r#"{ "gridSize": { "rows": 3 }, "words": [] }"#).unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::MissingGridSize)
        ));
    }

    #[test]
    fn test_invalid_grid_size() {
        for (rows, cols) in [(0, 5), (5, -1), (1000, 5)] {
            let text = format!(r#"{{ "gridSize": {{ "rows": {rows}, "cols": {cols} }}, "words": [] }}"#);
            let payload = PuzzlePayload::from_json(&text).unwrap();
            assert!(matches!(
                payload.validate(),
                Err(PayloadError::InvalidGridSize { .. })
            ));
        }
    }

    #[test]
    fn test_missing_word_fields() {
        let cases = [
            (r#"{ "clue": "c", "direction": "ACROSS", "startRow": 0, "startCol": 0 }"#, "word"),
            (r#"{ "word": "AB", "clue": " ", "direction": "ACROSS", "startRow": 0, "startCol": 0 }"#, "clue"),
            (r#"{ "word": "AB", "clue": "c", "startRow": 0, "startCol": 0 }"#, "direction"),
            (r#"{ "word": "AB", "clue": "c", "direction": "ACROSS", "startCol": 0 }"#, "startRow"),
            (r#"{ "word": "AB", "clue": "c", "direction": "ACROSS", "startRow": 0 }"#, "startCol"),
        ];
        for (word, expected) in cases {
            let payload = PuzzlePayload::from_json(&with_word(word)).unwrap();
            match payload.validate() {
                Err(PayloadError::MissingField { index: 0, field }) => assert_eq!(field, expected),
                other => panic!("expected missing {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_word_values() {
        let payload = PuzzlePayload::from_json(&with_word(
            r#"{ "word": "AB1", "clue": "c", "direction": "ACROSS", "startRow": 0, "startCol": 0 }"#,
        ))
        .unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::InvalidWord { index: 0, .. })
        ));

        // Uppercasing would turn one cell into two ("SS").
        let payload = PuzzlePayload::from_json(&with_word(
            r#"{ "word": "straße", "clue": "c", "direction": "ACROSS", "startRow": 0, "startCol": 0 }"#,
        ))
        .unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::InvalidWord { index: 0, .. })
        ));

        let payload = PuzzlePayload::from_json(&with_word(
            r#"{ "word": "AB", "clue": "c", "direction": "UP", "startRow": 0, "startCol": 0 }"#,
        ))
        .unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::InvalidDirection { index: 0, .. })
        ));

        let payload = PuzzlePayload::from_json(&with_word(
            r#"{ "word": "AB", "clue": "c", "direction": "DOWN", "startRow": -1, "startCol": 0 }"#,
        ))
        .unwrap();
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::InvalidStart {
                index: 0,
                row: -1,
                col: 0
            })
        ));
    }

    #[test]
    fn test_wrong_type_is_json_error() {
        let err = PuzzlePayload::from_json(r#"{ "gridSize": "big" }"#).unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
        assert!(err.to_string().starts_with("malformed puzzle JSON"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json {\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```"), "```");
        assert_eq!(strip_code_fence("no fence"), "no fence");
    }

    #[test]
    fn test_from_provider_text() {
        let fenced = format!("```json\n{VALID}\n```");
        let payload = PuzzlePayload::from_provider_text(&fenced).unwrap();
        assert_eq!(payload, PuzzlePayload::from_json(VALID).unwrap());
    }

    #[test]
    fn test_error_messages() {
        let err = PayloadError::MissingField {
            index: 2,
            field: "clue",
        };
        assert_eq!(err.to_string(), "word 2 is missing required field `clue`");
        assert_eq!(
            PayloadError::InvalidGridSize { rows: 0, cols: 3 }.to_string(),
            "grid size 0x3 is out of range (1..=256)"
        );
    }
}
