use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crossword_core::{PayloadError, PuzzlePayload};
use crossword_game::{LoadOutcome, PuzzleSession};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum LoadError {
    #[display("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("{_0}")]
    #[from]
    Payload(PayloadError),
}

/// Reads provider output from `path`. The text may be wrapped in a code fence.
pub(crate) fn read_payload(path: &Path) -> Result<PuzzlePayload, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(PuzzlePayload::from_provider_text(&text)?)
}

/// Loads the puzzle at `path` into `session`, replacing the current game.
pub(crate) fn load_file(session: &mut PuzzleSession, path: &Path) -> LoadOutcome {
    let request = session.begin_load();
    log::info!("{request}: loading {}", path.display());
    session.complete_load(request, read_payload(path))
}
