use std::fmt::Write as _;

use crossword_core::{Direction, Position};
use crossword_game::CheckReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GameStatus {
    NoPuzzle,
    Loading,
    Failed(String),
    InProgress,
    Checked(CheckReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    pub(crate) status: GameStatus,
    pub(crate) theme: String,
    pub(crate) cursor: Option<(Position, Direction)>,
}

pub(crate) fn render(vm: &StatusLineViewModel, out: &mut String) {
    let status = match &vm.status {
        GameStatus::NoPuzzle => "No puzzle loaded. Use `load PATH`.".to_owned(),
        GameStatus::Loading => "Loading...".to_owned(),
        GameStatus::Failed(message) => message.clone(),
        GameStatus::InProgress => "In progress".to_owned(),
        GameStatus::Checked(report) if report.solved => "Solved! Congratulations!".to_owned(),
        GameStatus::Checked(report) => format!(
            "{} of {} correct, {} to fix",
            report.correct, report.total, report.incorrect
        ),
    };
    if !vm.theme.is_empty() {
        let _ = write!(out, "Theme: {} | ", vm.theme);
    }
    out.push_str(&status);
    if let Some((pos, direction)) = vm.cursor {
        let _ = write!(out, " | {pos} {direction}");
    }
    out.push('\n');
}
