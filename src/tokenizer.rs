//! Line-at-a-time tokenization.
//!
//! [`tokenize_line`] is a pure function of the line and the state the previous line
//! ended in. Callers thread the returned state into the next call; the tokenizer
//! keeps nothing between calls, so re-tokenizing a line with the right incoming
//! state always gives the same answer.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::state::LineState;
use crate::token::{Token, TokenType};

mod keyword;
mod rules;


pub use keyword::{classify, RESERVED_WORDS};

/// The tokens of a line, and the state to start the next line in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub state: LineState,
}

impl LineTokens {
    /// Total length covered by the tokens, in characters.
    pub fn covered(&self) -> usize {
        self.tokens.iter().map(|t| t.length).sum()
    }

    pub fn token_types(&self) -> impl Iterator<Item = TokenType> + '_ {
        self.tokens.iter().map(|t| t.token_type)
    }

    /// The tokens as a flat `[code, length, code, length, ...]` array.
    pub fn to_flat(&self) -> Vec<u32> {
        self.tokens
            .iter()
            .flat_map(|t| [t.token_type.code(), t.length as u32])
            .collect()
    }
}

/// Split a single line into tokens, starting in `state`.
///
/// `line` should not contain a newline; see [`tokenize_document`] for multi-line input.
///
/// Fails with [`Error::InvalidState`] if `state` is the uninitialized state,
/// and with [`Error::UnmatchedInput`] if some position in the line matches no rule.
/// A failed line yields no tokens at all.
pub fn tokenize_line(line: &str, state: LineState) -> Result<LineTokens> {
    if state == LineState::None {
        return Err(Error::InvalidState { code: state.code() });
    }

    let mut tokens = Vec::new();
    let mut state = state;
    let mut rest = line;
    let mut column = 0;
    while !rest.is_empty() {
        let rules = rules::rules_for(state).ok_or(Error::InvalidState { code: state.code() })?;
        let Some((rule, lexeme)) = rules
            .iter()
            .find_map(|rule| rule.find(rest).map(|lexeme| (rule, lexeme)))
        else {
            debug!(%state, column, remainder = rest, "no rule matches");
            return Err(Error::UnmatchedInput {
                state,
                column,
                remainder: rest.to_owned(),
            });
        };

        let token_type = rule.action.token_type(lexeme);
        let length = lexeme.chars().count();
        trace!(rule = rule.name, %token_type, length, next = %rule.next, "matched");

        tokens.push(Token::new(token_type, length));
        column += length;
        rest = &rest[lexeme.len()..];
        state = rule.next;
    }

    Ok(LineTokens { tokens, state })
}

/// Tokenize a whole document, line by line, starting in `state`.
///
/// Lines are separated by `\n`; each separator becomes a [`TokenType::NewLine`]
/// token of length 1, so the token lengths add up to the length of `text`.
/// Errors are annotated with the (1-indexed) line they occurred on.
pub fn tokenize_document(text: &str, state: LineState) -> Result<LineTokens> {
    let mut result = LineTokens {
        tokens: Vec::new(),
        state,
    };
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.tokens.push(Token::new(TokenType::NewLine, 1));
        }
        let LineTokens { tokens, state } =
            tokenize_line(line, result.state).map_err(|err| err.at_line(i + 1))?;
        result.tokens.extend(tokens);
        result.state = state;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize from the top level and return just the types.
    fn types(line: &str) -> Result<Vec<TokenType>> {
        Ok(tokenize_line(line, LineState::TopLevelContent)?
            .token_types()
            .collect())
    }

    #[test]
    fn reserved_words_beat_identifiers() -> Result<()> {
        assert_eq!(types("end")?, [TokenType::KeywordControl]);
        assert_eq!(types("ending")?, [TokenType::VariableName]);
        assert_eq!(
            types("for i in xs")?,
            [
                TokenType::KeywordControl,
                TokenType::Whitespace,
                TokenType::VariableName,
                TokenType::Whitespace,
                TokenType::KeywordOperator,
                TokenType::Whitespace,
                TokenType::VariableName,
            ]
        );
        Ok(())
    }

    #[test]
    fn string_left_open_carries_over() -> Result<()> {
        let first = tokenize_line(r#"s = "abc"#, LineState::TopLevelContent)?;
        assert_eq!(first.state, LineState::InsideDoubleQuoteString);
        assert_eq!(
            first.token_types().collect::<Vec<_>>(),
            [
                TokenType::VariableName,
                TokenType::Whitespace,
                TokenType::Punctuation,
                TokenType::Whitespace,
                TokenType::Punctuation,
                TokenType::String,
            ]
        );

        let second = tokenize_line(r#"def" end"#, first.state)?;
        assert_eq!(second.state, LineState::TopLevelContent);
        assert_eq!(
            second.tokens,
            [
                Token::new(TokenType::String, 3),
                Token::new(TokenType::Punctuation, 1),
                Token::new(TokenType::Whitespace, 1),
                Token::new(TokenType::KeywordControl, 3),
            ]
        );
        Ok(())
    }

    #[test]
    fn other_quote_is_content() -> Result<()> {
        let got = tokenize_line(r#"it's "#, LineState::InsideDoubleQuoteString)?;
        assert_eq!(got.tokens, [Token::new(TokenType::String, 5)]);
        assert_eq!(got.state, LineState::InsideDoubleQuoteString);
        Ok(())
    }

    #[test]
    fn lengths_count_characters() -> Result<()> {
        let got = tokenize_line("αβ = \"ü\"", LineState::TopLevelContent)?;
        assert_eq!(
            got.tokens,
            [
                Token::new(TokenType::VariableName, 2),
                Token::new(TokenType::Whitespace, 1),
                Token::new(TokenType::Punctuation, 1),
                Token::new(TokenType::Whitespace, 1),
                Token::new(TokenType::Punctuation, 1),
                Token::new(TokenType::String, 1),
                Token::new(TokenType::Punctuation, 1),
            ]
        );
        assert_eq!(got.covered(), "αβ = \"ü\"".chars().count());
        Ok(())
    }

    #[test]
    fn ascii_word_boundary_and_ecmascript_whitespace() -> Result<()> {
        assert_eq!(
            tokenize_line("inα", LineState::TopLevelContent)?.tokens,
            [
                Token::new(TokenType::KeywordOperator, 2),
                Token::new(TokenType::VariableName, 1),
            ]
        );
        assert_eq!(
            tokenize_line("end\u{FEFF}", LineState::TopLevelContent)?.tokens,
            [
                Token::new(TokenType::KeywordControl, 3),
                Token::new(TokenType::Whitespace, 1),
            ]
        );
        match tokenize_line("x\u{85}y", LineState::TopLevelContent) {
            Err(Error::UnmatchedInput { column, remainder, .. }) => {
                assert_eq!(column, 1);
                assert_eq!(remainder, "\u{85}y");
            }
            v => panic!("unexpected result: {:?}", v),
        }
        Ok(())
    }

    #[test]
    fn error_on_unknown_character() {
        match tokenize_line("x * y", LineState::TopLevelContent) {
            Err(Error::UnmatchedInput {
                state,
                column,
                remainder,
            }) => {
                assert_eq!(state, LineState::TopLevelContent);
                assert_eq!(column, 2);
                assert_eq!(remainder, "* y");
            }
            v => panic!("unexpected result: {:?}", v),
        }
    }

    #[test]
    fn error_in_triple_quote_state() {
        match tokenize_line("abc", LineState::InsideTripleQuoteString) {
            Err(Error::UnmatchedInput { state, column, .. }) => {
                assert_eq!(state, LineState::InsideTripleQuoteString);
                assert_eq!(column, 0);
            }
            v => panic!("unexpected result: {:?}", v),
        }
        // Nothing to match, nothing to fail.
        let empty = tokenize_line("", LineState::InsideTripleQuoteString).unwrap();
        assert!(empty.tokens.is_empty());
        assert_eq!(empty.state, LineState::InsideTripleQuoteString);
    }

    #[test]
    fn uninitialized_state_is_rejected() {
        for line in ["", "x"] {
            match tokenize_line(line, LineState::None) {
                Err(Error::InvalidState { code }) => assert_eq!(code, 0),
                v => panic!("unexpected result for {:?}: {:?}", line, v),
            }
        }
    }

    #[test]
    fn flat_output() -> Result<()> {
        let got = tokenize_line("x = 1", LineState::TopLevelContent)?;
        assert_eq!(got.to_flat(), [2, 1, 0, 1, 3, 1, 0, 1, 5, 1]);
        Ok(())
    }

    #[test]
    fn document_inserts_newlines() -> Result<()> {
        let text = "s = \"a\nb\"\nreturn s";
        let got = tokenize_document(text, LineState::TopLevelContent)?;
        assert_eq!(
            got.token_types().collect::<Vec<_>>(),
            [
                TokenType::VariableName,
                TokenType::Whitespace,
                TokenType::Punctuation,
                TokenType::Whitespace,
                TokenType::Punctuation,
                TokenType::String,
                TokenType::NewLine,
                TokenType::String,
                TokenType::Punctuation,
                TokenType::NewLine,
                TokenType::KeywordReturn,
                TokenType::Whitespace,
                TokenType::VariableName,
            ]
        );
        assert_eq!(got.covered(), text.chars().count());
        assert_eq!(got.state, LineState::TopLevelContent);
        Ok(())
    }

    #[test]
    fn document_error_has_line_number() {
        let err = tokenize_document("x = 1\ny = 2\nz = x * y", LineState::TopLevelContent)
            .expect_err("tokenized a document with an unknown operator");
        match &err {
            Error::Line { line, source } => {
                assert_eq!(*line, 3);
                assert!(matches!(**source, Error::UnmatchedInput { column: 6, .. }));
            }
            v => panic!("unexpected error: {:?}", v),
        }
    }

    #[test]
    fn empty_document() -> Result<()> {
        let got = tokenize_document("", LineState::InsideSingleQuoteString)?;
        assert!(got.tokens.is_empty());
        assert_eq!(got.state, LineState::InsideSingleQuoteString);
        Ok(())
    }
}
