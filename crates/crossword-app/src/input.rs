use std::{fmt::Write as _, num::ParseIntError, path::PathBuf, str::SplitWhitespace};

use crossword_core::{Direction, ParseDirectionError, Position};
use crossword_game::MoveDirection;

use crate::action::Action;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    #[display("unknown command `{command}` (type `help` for a list)")]
    UnknownCommand { command: String },
    #[display("`{command}` expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[display("unexpected argument `{argument}` for `{command}`")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[display("`{input}` is not a valid {argument}: {source}")]
    InvalidNumber {
        argument: &'static str,
        input: String,
        source: ParseIntError,
    },
    #[display("{_0}")]
    #[from]
    InvalidDirection(ParseDirectionError),
}

struct Args<'a> {
    command: &'static str,
    rest: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, InputError> {
        self.rest.next().ok_or(InputError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn number<T>(&mut self, argument: &'static str) -> Result<T, InputError>
    where
        T: std::str::FromStr<Err = ParseIntError>,
    {
        let input = self.next(argument)?;
        input.parse().map_err(|source| InputError::InvalidNumber {
            argument,
            input: input.to_owned(),
            source,
        })
    }

    fn position(&mut self) -> Result<Position, InputError> {
        let row = self.number("a row")?;
        let col = self.number("a column")?;
        Ok(Position::new(row, col))
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.rest.next() {
            Some(argument) => Err(InputError::UnexpectedArgument {
                command: self.command,
                argument: argument.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

type Parse = fn(&mut Args<'_>) -> Result<Vec<Action>, InputError>;

struct Command {
    names: &'static [&'static str],
    usage: &'static str,
    summary: &'static str,
    parse: Parse,
}

impl Command {
    const fn new(
        names: &'static [&'static str],
        usage: &'static str,
        summary: &'static str,
        parse: Parse,
    ) -> Self {
        Self {
            names,
            usage,
            summary,
            parse,
        }
    }
}

fn one(action: Action) -> Result<Vec<Action>, InputError> {
    Ok(vec![action])
}

fn parse_click(args: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Activate(args.position()?))
}

fn parse_focus(args: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Focus(args.position()?))
}

fn parse_up(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Move(MoveDirection::Up))
}

fn parse_down(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Move(MoveDirection::Down))
}

fn parse_left(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Move(MoveDirection::Left))
}

fn parse_right(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Move(MoveDirection::Right))
}

fn parse_toggle(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::ToggleDirection)
}

fn parse_backspace(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Backspace)
}

fn parse_type(args: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    Ok(args.next("letters")?.chars().map(Action::TypeLetter).collect())
}

fn parse_clear(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::ClearCell)
}

fn parse_clue(args: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    let number = args.number("a clue number")?;
    let direction: Direction = args.next("`across` or `down`")?.parse()?;
    one(Action::SelectClue { number, direction })
}

fn parse_check(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Check)
}

fn parse_load(args: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::LoadPuzzle(PathBuf::from(args.next("a file path")?)))
}

fn parse_help(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::ShowHelp)
}

fn parse_quit(_: &mut Args<'_>) -> Result<Vec<Action>, InputError> {
    one(Action::Quit)
}

const COMMANDS: [Command; 15] = [
    Command::new(&["click"], "click R C", "select a cell, twice to turn", parse_click),
    Command::new(&["focus"], "focus R C", "move focus to a cell", parse_focus),
    Command::new(&["up"], "up", "move the cursor up", parse_up),
    Command::new(&["down"], "down", "move the cursor down", parse_down),
    Command::new(&["left"], "left", "move the cursor left", parse_left),
    Command::new(&["right"], "right", "move the cursor right", parse_right),
    Command::new(&["tab", "enter"], "tab", "switch direction", parse_toggle),
    Command::new(&["backspace", "bs"], "backspace", "clear or step back", parse_backspace),
    Command::new(&["type"], "type LETTERS", "enter letters", parse_type),
    Command::new(&["clear"], "clear", "clear the active cell", parse_clear),
    Command::new(&["clue"], "clue N across|down", "jump to a clue", parse_clue),
    Command::new(&["check"], "check", "check all answers", parse_check),
    Command::new(&["load"], "load PATH", "load a puzzle file", parse_load),
    Command::new(&["help", "?"], "help", "show this list", parse_help),
    Command::new(&["quit", "exit", "q"], "quit", "leave the game", parse_quit),
];

/// Parses one input line into actions. A blank line yields no actions.
pub(crate) fn parse_line(line: &str) -> Result<Vec<Action>, InputError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(Vec::new());
    };
    let lowered = name.to_lowercase();
    let Some(command) = COMMANDS
        .iter()
        .find(|command| command.names.iter().any(|&alias| alias == lowered))
    else {
        return Err(InputError::UnknownCommand {
            command: name.to_owned(),
        });
    };

    let mut args = Args {
        command: command.names[0],
        rest: words,
    };
    let actions = (command.parse)(&mut args)?;
    args.finish()?;
    Ok(actions)
}

pub(crate) fn help_text() -> String {
    let width = COMMANDS
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or_default();
    let mut text = String::new();
    for command in &COMMANDS {
        let _ = writeln!(text, "  {:width$}  {}", command.usage, command.summary);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        assert_eq!(
            parse_line("click 2 3").unwrap(),
            [Action::Activate(Position::new(2, 3))]
        );
        assert_eq!(
            parse_line("  FOCUS 0 1 ").unwrap(),
            [Action::Focus(Position::new(0, 1))]
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_line("bs").unwrap(), [Action::Backspace]);
        assert_eq!(parse_line("enter").unwrap(), [Action::ToggleDirection]);
        assert_eq!(parse_line("q").unwrap(), [Action::Quit]);
        assert!(parse_line("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_type_expands_letters() {
        assert_eq!(
            parse_line("type cat").unwrap(),
            [
                Action::TypeLetter('c'),
                Action::TypeLetter('a'),
                Action::TypeLetter('t'),
            ]
        );
    }

    #[test]
    fn test_parse_clue() {
        assert_eq!(
            parse_line("clue 12 Down").unwrap(),
            [Action::SelectClue {
                number: 12,
                direction: Direction::Down,
            }]
        );
        assert!(matches!(
            parse_line("clue 1 sideways"),
            Err(InputError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_line("jump"),
            Err(InputError::UnknownCommand { command }) if command == "jump"
        ));
        assert!(matches!(
            parse_line("click 1"),
            Err(InputError::MissingArgument {
                command: "click",
                argument: "a column",
            })
        ));
        assert!(matches!(
            parse_line("click -1 0"),
            Err(InputError::InvalidNumber { argument: "a row", .. })
        ));
        assert!(matches!(
            parse_line("check now"),
            Err(InputError::UnexpectedArgument { command: "check", .. })
        ));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for command in &COMMANDS {
            assert!(help.contains(command.usage));
        }
    }
}
