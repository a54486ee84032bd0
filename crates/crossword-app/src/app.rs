//! The terminal application: feeds input lines through the action queue and
//! renders the resulting screen.

use std::path::Path;

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler, input,
    input::InputError,
    state::{AppState, Settings, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct CrosswordApp {
    app_state: AppState,
    ui_state: UiState,
    action_queue: ActionRequestQueue,
}

impl CrosswordApp {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            app_state: AppState::new(settings),
            ui_state: UiState::default(),
            action_queue: ActionRequestQueue::default(),
        }
    }

    /// Loads a puzzle file as if `load PATH` had been typed.
    pub fn load(&mut self, path: &Path) {
        self.ui_state.begin_turn();
        self.action_queue
            .request(Action::LoadPuzzle(path.to_owned()));
        self.flush();
    }

    /// Parses and runs one line of user input.
    ///
    /// Messages from the previous line are dropped first. A parse error leaves
    /// the game untouched.
    pub fn handle_line(&mut self, line: &str) -> Result<(), InputError> {
        self.ui_state.begin_turn();
        let actions = input::parse_line(line)?;
        self.action_queue.extend(actions);
        self.flush();
        Ok(())
    }

    fn flush(&mut self) {
        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut self.action_queue,
        );
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.ui_state.quit_requested
    }

    #[must_use]
    pub fn render(&self) -> String {
        let vm = view_model_builder::build_game_screen_vm(&self.app_state, &self.ui_state);
        ui::render(&vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_without_puzzle() {
        let mut app = CrosswordApp::new(Settings::default());
        assert!(app.render().contains("No puzzle loaded"));

        app.handle_line("help").unwrap();
        assert!(app.render().contains("clue N across|down"));

        app.handle_line("up").unwrap();
        assert!(app.render().contains("No puzzle loaded."));

        assert!(app.handle_line("fly away").is_err());
        app.handle_line("quit").unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_play_sample_puzzle() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/animals.json");
        let mut app = CrosswordApp::new(Settings::default());
        app.load(&path);
        let screen = app.render();
        assert!(screen.contains("Theme: Animals"));
        assert!(screen.contains("3. Hairpieces (4)"));

        for line in [
            "click 0 0",
            "type cat",
            "clue 1 down",
            "type cow",
            "clue 2 down",
            "type tiger",
            "clue 3 across",
            "type wigs",
            "clue 4 across",
            "type emu",
            "clue 5 across",
            "type rat",
            "check",
        ] {
            app.handle_line(line).unwrap();
        }
        let screen = app.render();
        assert!(screen.contains("All answers are correct."), "{screen}");
        assert!(screen.contains("Solved!"));
    }

    #[test]
    fn test_help_is_shown_once() {
        let mut app = CrosswordApp::new(Settings::default());
        app.handle_line("help").unwrap();
        assert!(app.render().contains("show this list"));
        app.handle_line("").unwrap();
        assert!(!app.render().contains("show this list"));
    }
}
