//! State carried from one line to the next.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Where the tokenizer is when a line ends.
///
/// This is the whole carry-over between lines. Julia's string forms don't nest,
/// so there is no depth or delimiter stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    /// Uninitialized. The tokenizer refuses to start from here.
    None,
    #[default]
    TopLevelContent,
    InsideSingleQuoteString,
    InsideDoubleQuoteString,
    /// Reserved for triple-quoted strings: no rules, and no rule enters it.
    InsideTripleQuoteString,
}

/// The state for the first line of a document.
pub const INITIAL_LINE_STATE: LineState = LineState::TopLevelContent;

impl LineState {
    pub const ALL: [LineState; 5] = [
        LineState::None,
        LineState::TopLevelContent,
        LineState::InsideSingleQuoteString,
        LineState::InsideDoubleQuoteString,
        LineState::InsideTripleQuoteString,
    ];

    pub fn code(self) -> u32 {
        match self {
            LineState::None => 0,
            LineState::TopLevelContent => 1,
            LineState::InsideSingleQuoteString => 2,
            LineState::InsideDoubleQuoteString => 3,
            LineState::InsideTripleQuoteString => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LineState::None => "None",
            LineState::TopLevelContent => "TopLevelContent",
            LineState::InsideSingleQuoteString => "InsideSingleQuoteString",
            LineState::InsideDoubleQuoteString => "InsideDoubleQuoteString",
            LineState::InsideTripleQuoteString => "InsideTripleQuoteString",
        }
    }
}

impl TryFrom<u32> for LineState {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        LineState::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(Error::InvalidState { code })
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| format!("unknown line state {:?}", s))
    }
}
