//! Error type for tokenization.
//!
//! The tokenizer never recovers on its own: a line either tokenizes completely or
//! fails with one of these. Whether to skip the line, substitute a fallback token,
//! or give up on the document is the caller's call.

use std::io::ErrorKind;

use crate::state::LineState;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No rule for `state` matches at `column` (counted in characters).
    /// `remainder` is the unconsumed tail of the line, starting at `column`.
    #[error("no rule in state {state} matches at column {column}: {remainder:?}")]
    UnmatchedInput {
        state: LineState,
        column: usize,
        remainder: String,
    },

    /// The state is not one the tokenizer can start from:
    /// either a raw code outside the enumeration, or the uninitialized state.
    #[error("invalid line state (code {code})")]
    InvalidState { code: u32 },

    /// An error from a specific line of a multi-line document (1-indexed).
    #[error("at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add the (1-indexed) line number the error occurred on.
    pub fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }

    /// The error without any line annotation.
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            e => e,
        }
    }
}

/// The main result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        std::io::Error::new(ErrorKind::InvalidInput, value)
    }
}
