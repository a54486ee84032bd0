use crossword_core::Position;
use crossword_game::{AdvancePolicy, EntryOptions, Game, PuzzleSession};

#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) session: PuzzleSession,
    pub(crate) settings: Settings,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            session: PuzzleSession::new(),
            settings,
        }
    }

    #[must_use]
    pub(crate) fn game(&self) -> Option<&Game> {
        self.session.game()
    }

    #[must_use]
    pub(crate) fn advance_policy(&self) -> AdvancePolicy {
        if self.settings.assist.auto_advance {
            AdvancePolicy::Advance
        } else {
            AdvancePolicy::Stay
        }
    }

    #[must_use]
    pub(crate) fn entry_options(&self) -> EntryOptions {
        EntryOptions::default().advance_policy(self.advance_policy())
    }
}

// UiState holds what the terminal shows besides the game itself. It is reset per input line.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) focused_cell: Option<Position>,
    pub(crate) messages: Vec<String>,
    pub(crate) show_help: bool,
    pub(crate) quit_requested: bool,
}

impl UiState {
    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub(crate) fn begin_turn(&mut self) {
        self.messages.clear();
        self.show_help = false;
    }
}

/// User preferences, set from the command line.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub assist: AssistSettings,
}

#[derive(Debug, Clone)]
pub struct AssistSettings {
    /// Move to the next cell of the word after typing a letter.
    pub auto_advance: bool,
    /// Print clue numbers above their start cells.
    pub show_clue_numbers: bool,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            show_clue_numbers: true,
        }
    }
}
