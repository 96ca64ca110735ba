//! Incremental, line-oriented tokenizer for Julia source, for syntax highlighting.
//!
//! Each call classifies one line into [`Token`]s (a type and a length) and returns the
//! [`LineState`] to start the next line in. Strings may run across lines; the state is
//! how the next call knows it is still inside one.
//!
//! ```
//! use tokenize_julia::{tokenize_line, TokenType, INITIAL_LINE_STATE};
//!
//! let line = tokenize_line("x = 1", INITIAL_LINE_STATE).unwrap();
//! assert_eq!(line.tokens[0].token_type, TokenType::VariableName);
//! assert_eq!(line.state, INITIAL_LINE_STATE);
//! ```
//!
//! Limitations:
//! - There is no float rule: `0.05` is a number, a `.`, and another number.
//! - Triple-quoted strings are not recognized.

mod error;
mod state;
mod token;
mod tokenizer;

pub use error::{Error, Result};
pub use state::{LineState, INITIAL_LINE_STATE};
pub use token::{Token, TokenType};
pub use tokenizer::{classify, tokenize_document, tokenize_line, LineTokens, RESERVED_WORDS};
