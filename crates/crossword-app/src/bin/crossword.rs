//! Terminal crossword player.
//!
//! Loads a puzzle file produced by a word-list provider and reads commands from
//! standard input. Type `help` for the command list.

use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    process::ExitCode,
    sync::LazyLock,
};

use clap::Parser;
use crossword_app::{AssistSettings, CrosswordApp, Settings, build_version};

static VERSION: LazyLock<String> = LazyLock::new(build_version);

#[derive(Debug, Parser)]
#[command(version = VERSION.as_str(), about)]
struct Args {
    /// Puzzle JSON, optionally wrapped in a Markdown code fence.
    puzzle: PathBuf,

    /// Keep the cursor on a cell after typing into it.
    #[arg(long)]
    no_auto_advance: bool,

    /// Do not print clue numbers above the grid cells.
    #[arg(long)]
    hide_numbers: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            assist: AssistSettings {
                auto_advance: !self.no_auto_advance,
                show_clue_numbers: !self.hide_numbers,
            },
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut app = CrosswordApp::new(args.settings());
    app.load(&args.puzzle);
    print!("{}", app.render());

    let mut stdout = io::stdout();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        };
        match app.handle_line(&line) {
            Ok(()) => print!("{}", app.render()),
            Err(e) => println!("error: {e}"),
        }
        if app.should_quit() {
            break;
        }
        let _ = stdout.flush();
    }
    ExitCode::SUCCESS
}
