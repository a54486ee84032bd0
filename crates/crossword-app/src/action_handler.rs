use std::path::Path;

use crossword_core::{Direction, Position};
use crossword_game::{Game, LoadOutcome, NavEvent, Transition};

use crate::{
    action::{Action, ActionRequestQueue},
    loader,
    state::{AppState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::Activate(pos) => ctx.navigate(NavEvent::Activate(pos)),
        Action::Focus(pos) => ctx.focus(pos),
        Action::Move(direction) => ctx.navigate(NavEvent::Move(direction)),
        Action::ToggleDirection => ctx.navigate(NavEvent::ToggleDirection),
        Action::Backspace => ctx.backspace(),
        Action::TypeLetter(letter) => ctx.type_letter(letter),
        Action::ClearCell => ctx.clear_cell(),
        Action::SelectClue { number, direction } => ctx.select_clue(number, direction),
        Action::Check => ctx.check(),
        Action::LoadPuzzle(path) => ctx.load(&path),
        Action::ShowHelp => ctx.ui_state.show_help = true,
        Action::Quit => ctx.ui_state.quit_requested = true,
    }
}

impl ActionContext<'_> {
    fn game_mut(&mut self) -> Option<&mut Game> {
        let game = self.app_state.session.game_mut();
        if game.is_none() {
            self.ui_state.notify("No puzzle loaded.");
        }
        game
    }

    fn apply(&mut self, transition: Transition) {
        if transition.state.active_cell().is_none() {
            self.ui_state.focused_cell = None;
        } else if let Some(pos) = transition.focus {
            self.ui_state.focused_cell = Some(pos);
        }
    }

    fn focus(&mut self, pos: Position) {
        let Some(game) = self.game_mut() else {
            return;
        };
        // The user moved focus directly, so no instruction comes back.
        let transition = game.handle(NavEvent::Focus(pos));
        if transition.state.active_cell() == Some(pos) {
            self.ui_state.focused_cell = Some(pos);
        }
    }

    fn navigate(&mut self, event: NavEvent) {
        let Some(game) = self.game_mut() else {
            return;
        };
        let transition = game.handle(event);
        self.apply(transition);
    }

    fn backspace(&mut self) {
        let Some(game) = self.game_mut() else {
            return;
        };
        let transition = game.backspace();
        self.apply(transition);
    }

    fn enter_at_cursor(&mut self, input: &str) {
        let options = self.app_state.entry_options();
        let Some(game) = self.game_mut() else {
            return;
        };
        let Some(pos) = game.navigation().active_cell() else {
            self.ui_state.notify("Select a cell first.");
            return;
        };
        match game.enter(pos, input, &options) {
            Ok(outcome) => {
                if let Some(next) = outcome.focus {
                    self.ui_state.focused_cell = Some(next);
                }
            }
            Err(e) => self.ui_state.notify(format!("Cannot enter {input:?}: {e}")),
        }
    }

    fn type_letter(&mut self, letter: char) {
        self.enter_at_cursor(letter.encode_utf8(&mut [0; 4]));
    }

    fn clear_cell(&mut self) {
        self.enter_at_cursor("");
    }

    fn select_clue(&mut self, number: u32, direction: Direction) {
        let Some(game) = self.game_mut() else {
            return;
        };
        let word = game
            .clue_index()
            .find(number, direction)
            .map(|entry| entry.word_id());
        let Some(word) = word else {
            self.ui_state
                .notify(format!("There is no {number} {direction}."));
            return;
        };
        let transition = game.handle(NavEvent::SelectClue { word, direction });
        self.apply(transition);
    }

    fn check(&mut self) {
        let Some(game) = self.game_mut() else {
            return;
        };
        let report = game.check();
        if report.solved {
            self.ui_state.notify("All answers are correct.");
        } else {
            self.ui_state.notify(format!(
                "{} cell(s) are wrong or empty.",
                report.incorrect
            ));
        }
    }

    fn load(&mut self, path: &Path) {
        self.ui_state.focused_cell = None;
        match loader::load_file(&mut self.app_state.session, path) {
            LoadOutcome::Applied => self.ui_state.notify(format!("Loaded {}.", path.display())),
            // The session holds the message; the status line shows it.
            LoadOutcome::Failed => {}
            LoadOutcome::Superseded => log::debug!("load of {} was superseded", path.display()),
        }
    }
}
