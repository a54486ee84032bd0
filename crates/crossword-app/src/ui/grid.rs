use std::fmt::Write as _;

bitflags::bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const ACTIVE = 0b0000_0001;
        const ACTIVE_WORD = 0b0000_0010;
        const CORRECT = 0b0000_0100;
        const INCORRECT = 0b0000_1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellContent {
    Block,
    Open {
        value: Option<char>,
        number: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) content: CellContent,
    pub(crate) visual_state: GridVisualState,
}

impl GridCell {
    fn number(&self) -> Option<u32> {
        match self.content {
            CellContent::Open { number, .. } => number,
            CellContent::Block => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridViewModel {
    rows: Vec<Vec<GridCell>>,
    show_numbers: bool,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(rows: Vec<Vec<GridCell>>, show_numbers: bool) -> Self {
        Self { rows, show_numbers }
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> &GridCell {
        &self.rows[row][col]
    }
}

const CELL_WIDTH: usize = 4;

fn cell_text(cell: &GridCell) -> [char; CELL_WIDTH] {
    let CellContent::Open { value, .. } = cell.content else {
        return ['#'; CELL_WIDTH];
    };
    let state = cell.visual_state;
    let (open, close) = if state.contains(GridVisualState::ACTIVE) {
        ('[', ']')
    } else if state.contains(GridVisualState::ACTIVE_WORD) {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    let mark = if state.contains(GridVisualState::INCORRECT) {
        '!'
    } else if state.contains(GridVisualState::CORRECT) {
        '+'
    } else {
        ' '
    };
    [open, value.unwrap_or('.'), close, mark]
}

// Rendered as:
//
//       0   1   2
//      1           <- clue numbers, when shown
//   0 [C] (A) (T)
pub(crate) fn render(vm: &GridViewModel, out: &mut String) {
    let cols = vm.rows.first().map_or(0, Vec::len);
    let _ = write!(out, "    ");
    for col in 0..cols {
        let _ = write!(out, " {col:<width$}", width = CELL_WIDTH - 1);
    }
    out.push('\n');

    for (row, cells) in vm.rows.iter().enumerate() {
        if vm.show_numbers && cells.iter().any(|cell| cell.number().is_some()) {
            out.push_str("    ");
            for cell in cells {
                match cell.number() {
                    Some(number) => {
                        let _ = write!(out, "{number:<CELL_WIDTH$}");
                    }
                    None => out.push_str(&" ".repeat(CELL_WIDTH)),
                }
            }
            out.push('\n');
        }

        let _ = write!(out, "{row:>3} ");
        for cell in cells {
            out.extend(cell_text(cell));
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(value: Option<char>, number: Option<u32>, visual_state: GridVisualState) -> GridCell {
        GridCell {
            content: CellContent::Open { value, number },
            visual_state,
        }
    }

    fn block() -> GridCell {
        GridCell {
            content: CellContent::Block,
            visual_state: GridVisualState::empty(),
        }
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&block()), ['#'; 4]);
        let active = GridVisualState::ACTIVE | GridVisualState::ACTIVE_WORD;
        assert_eq!(cell_text(&open(Some('A'), None, active)), ['[', 'A', ']', ' ']);
        let wrong = GridVisualState::ACTIVE_WORD | GridVisualState::INCORRECT;
        assert_eq!(cell_text(&open(None, None, wrong)), ['(', '.', ')', '!']);
        assert_eq!(
            cell_text(&open(Some('B'), None, GridVisualState::CORRECT)),
            [' ', 'B', ' ', '+']
        );
    }

    #[test]
    fn test_render_numbers_row() {
        let vm = GridViewModel::new(
            vec![vec![open(None, Some(1), GridVisualState::empty()), block()]],
            true,
        );
        let mut out = String::new();
        render(&vm, &mut out);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].trim(), "1");
        assert_eq!(lines[2], "  0  .  ####");

        let hidden = GridViewModel::new(vm.rows.clone(), false);
        let mut out = String::new();
        render(&hidden, &mut out);
        assert_eq!(out.lines().count(), 2);
    }
}
