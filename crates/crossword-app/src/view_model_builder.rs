use crossword_core::{Cell, Direction, Evaluation, Position};
use crossword_game::{CheckReport, Game, SessionState, check};

use crate::{
    input,
    state::{AppState, UiState},
    ui::{
        GameScreenViewModel,
        clues::{ClueLine, ClueListViewModel},
        grid::{CellContent, GridCell, GridViewModel, GridVisualState},
        status_line::{GameStatus, StatusLineViewModel},
    },
};

fn build_cell(game: &Game, pos: Position, cell: &Cell) -> GridCell {
    if !cell.is_writable() {
        return GridCell {
            content: CellContent::Block,
            visual_state: GridVisualState::empty(),
        };
    }

    let mut visual_state = GridVisualState::empty();
    if game.navigation().active_cell() == Some(pos) {
        visual_state.insert(GridVisualState::ACTIVE);
    }
    if game.is_in_active_word(pos) {
        visual_state.insert(GridVisualState::ACTIVE_WORD);
    }
    // Stale evaluations stay on the cells after an edit but are hidden.
    if game.is_checked() {
        match cell.evaluation() {
            Some(Evaluation::Correct) => visual_state.insert(GridVisualState::CORRECT),
            Some(Evaluation::Incorrect) => visual_state.insert(GridVisualState::INCORRECT),
            None => {}
        }
    }

    GridCell {
        content: CellContent::Open {
            value: cell.value(),
            number: cell.clue_number(),
        },
        visual_state,
    }
}

#[must_use]
pub(crate) fn build_grid_vm(game: &Game, show_numbers: bool) -> GridViewModel {
    let grid = game.grid();
    let rows = (0..grid.size().rows())
        .map(|row| {
            (0..grid.size().cols())
                .map(|col| {
                    let pos = Position::new(row, col);
                    build_cell(game, pos, &grid[pos])
                })
                .collect()
        })
        .collect();
    GridViewModel::new(rows, show_numbers)
}

#[must_use]
pub(crate) fn build_clue_vms(game: &Game) -> Vec<ClueListViewModel> {
    let index = game.clue_index();
    Direction::ALL
        .into_iter()
        .map(|direction| ClueListViewModel {
            direction,
            lines: index
                .entries(direction)
                .iter()
                .map(|entry| ClueLine {
                    text: entry.to_string(),
                    active: game.is_active_clue(entry),
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub(crate) fn build_status_line_vm(
    app_state: &AppState,
    ui_state: &UiState,
) -> StatusLineViewModel {
    let (status, theme, cursor) = match app_state.session.state() {
        SessionState::Idle => (GameStatus::NoPuzzle, String::new(), None),
        SessionState::Loading { .. } => (GameStatus::Loading, String::new(), None),
        SessionState::Failed { message } => {
            (GameStatus::Failed(message.clone()), String::new(), None)
        }
        SessionState::Ready(game) => {
            let status = if game.is_checked() {
                GameStatus::Checked(check_summary(game))
            } else {
                GameStatus::InProgress
            };
            let direction = game.navigation().direction();
            let cursor = ui_state.focused_cell.map(|pos| (pos, direction));
            (status, game.puzzle().theme().to_owned(), cursor)
        }
    };
    StatusLineViewModel {
        status,
        theme,
        cursor,
    }
}

// Any edit leaves the checked state, so a recount matches the last check.
fn check_summary(game: &Game) -> CheckReport {
    check::check(game.grid()).report
}

#[must_use]
pub(crate) fn build_game_screen_vm(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let show_numbers = app_state.settings.assist.show_clue_numbers;
    let (grid, clues) = match app_state.game() {
        Some(game) => (Some(build_grid_vm(game, show_numbers)), build_clue_vms(game)),
        None => (None, Vec::new()),
    };
    GameScreenViewModel {
        grid,
        clues,
        status_line: build_status_line_vm(app_state, ui_state),
        messages: ui_state.messages.clone(),
        help: ui_state.show_help.then(input::help_text),
    }
}
