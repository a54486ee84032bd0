//! Plain-text rendering of the game screen.

use self::{clues::ClueListViewModel, grid::GridViewModel, status_line::StatusLineViewModel};

pub(crate) mod clues;
pub(crate) mod grid;
pub(crate) mod status_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid: Option<GridViewModel>,
    pub(crate) clues: Vec<ClueListViewModel>,
    pub(crate) status_line: StatusLineViewModel,
    pub(crate) messages: Vec<String>,
    pub(crate) help: Option<String>,
}

#[must_use]
pub(crate) fn render(vm: &GameScreenViewModel) -> String {
    let mut out = String::new();
    if let Some(help) = &vm.help {
        out.push_str(help);
        out.push('\n');
    }
    if let Some(grid) = &vm.grid {
        grid::render(grid, &mut out);
        out.push('\n');
    }
    for list in &vm.clues {
        clues::render(list, &mut out);
        out.push('\n');
    }
    for message in &vm.messages {
        out.push_str(message);
        out.push('\n');
    }
    status_line::render(&vm.status_line, &mut out);
    out
}
