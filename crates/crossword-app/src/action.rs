use std::{mem, path::PathBuf};

use crossword_core::{Direction, Position};
use crossword_game::MoveDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Activate(Position),
    Focus(Position),
    Move(MoveDirection),
    ToggleDirection,
    Backspace,
    TypeLetter(char),
    ClearCell,
    SelectClue { number: u32, direction: Direction },
    Check,
    LoadPuzzle(PathBuf),
    ShowHelp,
    Quit,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.actions.extend(actions);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
