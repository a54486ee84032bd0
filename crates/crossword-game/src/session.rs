use std::fmt;

use crossword_core::{Puzzle, PuzzlePayload};

use crate::Game;

/// Identifies one puzzle load.
///
/// Ids increase monotonically within a [`PuzzleSession`]; only the most recent
/// one may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("load#{_0}")]
pub struct RequestId(u64);

/// Where a session is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Nothing has been loaded yet.
    Idle,
    /// Waiting for the result of `request`.
    Loading {
        /// The outstanding request.
        request: RequestId,
    },
    /// A puzzle is being played.
    Ready(Box<Game>),
    /// The last load failed.
    Failed {
        /// User-facing description of the failure.
        message: String,
    },
}

/// What [`PuzzleSession::complete_load`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LoadOutcome {
    /// The puzzle was built and a new game started.
    Applied,
    /// The payload was rejected; the session is in [`SessionState::Failed`].
    Failed,
    /// A newer load was started in the meantime; the result was dropped.
    Superseded,
}

/// Owns the current game and sequences puzzle loads.
///
/// Starting a load drops the current game at once, so no stale puzzle stays
/// interactive while a replacement is pending. Results of anything but the
/// latest load are discarded.
///
/// # Example
///
/// ```
/// use crossword_game::{LoadOutcome, PuzzleSession};
/// use crossword_core::PuzzlePayload;
///
/// let json = r#"{
///     "theme": "Pets",
///     "gridSize": { "rows": 1, "cols": 3 },
///     "words": [{ "word": "DOG", "clue": "Barker", "direction": "ACROSS", "startRow": 0, "startCol": 0 }]
/// }"#;
///
/// let mut session = PuzzleSession::new();
/// let stale = session.begin_load();
/// let latest = session.begin_load();
///
/// assert_eq!(session.complete_load(stale, PuzzlePayload::from_json(json)), LoadOutcome::Superseded);
/// assert_eq!(session.complete_load(latest, PuzzlePayload::from_json(json)), LoadOutcome::Applied);
/// assert_eq!(session.game().map(|game| game.puzzle().theme()), Some("Pets"));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    state: SessionState,
    next_request: u64,
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            next_request: 1,
        }
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Starts a new load, dropping the current game and any earlier request.
    pub fn begin_load(&mut self) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;
        if let SessionState::Loading { request: previous } = self.state {
            log::debug!("{request} supersedes {previous}");
        }
        self.state = SessionState::Loading { request };
        request
    }

    /// Delivers the result of `request`.
    ///
    /// The result is applied only if `request` is the load currently pending.
    /// Both a failed fetch (`Err`) and a payload that does not build end the
    /// load in [`SessionState::Failed`].
    pub fn complete_load<E>(
        &mut self,
        request: RequestId,
        result: Result<PuzzlePayload, E>,
    ) -> LoadOutcome
    where
        E: fmt::Display,
    {
        match self.state {
            SessionState::Loading { request: pending } if pending == request => {}
            _ => {
                log::debug!("discarding result of superseded {request}");
                return LoadOutcome::Superseded;
            }
        }

        let built = match result {
            Ok(payload) => Puzzle::from_payload(&payload).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match built {
            Ok(puzzle) => {
                self.state = SessionState::Ready(Box::new(Game::new(puzzle)));
                LoadOutcome::Applied
            }
            Err(e) => {
                log::warn!("{request} rejected: {e}");
                self.state = SessionState::Failed {
                    message: format!("Failed to generate crossword: {e}"),
                };
                LoadOutcome::Failed
            }
        }
    }

    /// Starts a game on an already built puzzle, cancelling any pending load.
    pub fn replace(&mut self, puzzle: Puzzle) {
        self.state = SessionState::Ready(Box::new(Game::new(puzzle)));
    }

    /// Returns the current game.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        match &self.state {
            SessionState::Ready(game) => Some(&**game),
            _ => None,
        }
    }

    /// Returns the current game mutably.
    #[must_use]
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        match &mut self.state {
            SessionState::Ready(game) => Some(&mut **game),
            _ => None,
        }
    }

    /// Returns `true` while a load is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns the message of the last failed load.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
