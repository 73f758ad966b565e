//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions; content that fits no rule is skipped, never an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input {origin}")]
    InputUnreadable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output {target}")]
    OutputUnwritable {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid delimiter {0:?}: must not be a double quote or line break")]
    InvalidDelimiter(char),
}
