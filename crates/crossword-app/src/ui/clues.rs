use std::fmt::Write as _;

use crossword_core::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueLine {
    pub(crate) text: String,
    pub(crate) active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueListViewModel {
    pub(crate) direction: Direction,
    pub(crate) lines: Vec<ClueLine>,
}

pub(crate) fn render(vm: &ClueListViewModel, out: &mut String) {
    let _ = writeln!(out, "{}", vm.direction);
    if vm.lines.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in &vm.lines {
        let marker = if line.active { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {}", line.text);
    }
}
