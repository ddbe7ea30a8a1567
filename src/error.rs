use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The errors the arcade can produce.
#[derive(Debug, Error)]
pub enum GameError {
    /// The word source could not be opened or read.
    #[error("there was an issue creating or reading {}", .path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every word in the bank has already been played this session.
    #[error("nothing left to guess")]
    EmptyPool,

    /// A round operation was requested before any word was chosen.
    #[error("no round is in progress")]
    NoActiveRound,

    /// The menu choice does not name a game in the arcade.
    #[error("I am not sure what {0} is...")]
    UnknownGame(String),
}
