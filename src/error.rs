use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading an [`Alphabet`](crate::alphabet::Alphabet).
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("failed to read alphabet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("alphabet has no entries")]
    Empty,

    #[error("alphabet entry {position} is empty")]
    EmptyEntry { position: usize },

    #[error("alphabet entry {entry:?} appears at both {first} and {second}")]
    Duplicate {
        entry: String,
        first: usize,
        second: usize,
    },

    /// The tokenizer only ever produces one codepoint, or one codepoint followed by `h`.
    #[error("alphabet entry {entry:?} at {position} can never be produced as a unit")]
    UnreachableEntry { entry: String, position: usize },
}
