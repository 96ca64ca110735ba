//! Token types, and the tokens themselves.

use std::fmt;
use std::str::FromStr;

/// A lexical category.
///
/// Each type has a human-readable name (see [`TokenType::name`]) and a stable
/// numeric code (see [`TokenType::code`]) for consumers that want a flat wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Placeholder category; never emitted.
    None,
    /// A reserved word without a finer category.
    Keyword,
    Whitespace,
    /// Separator between lines of a document; only emitted by document tokenization.
    NewLine,
    /// An identifier.
    VariableName,
    Punctuation,
    /// Content of a string literal, excluding its delimiters.
    String,
    Numeric,
    /// Reserved for attribute-like syntax; never emitted.
    Attribute,
    KeywordReturn,
    /// `true` and `false`.
    LanguageConstant,
    KeywordImport,
    KeywordControl,
    KeywordOperator,
    KeywordFunction,
}

impl TokenType {
    /// Every token type, in catalog order.
    pub const ALL: [TokenType; 15] = [
        TokenType::None,
        TokenType::Keyword,
        TokenType::Whitespace,
        TokenType::NewLine,
        TokenType::VariableName,
        TokenType::Punctuation,
        TokenType::String,
        TokenType::Numeric,
        TokenType::Attribute,
        TokenType::KeywordReturn,
        TokenType::LanguageConstant,
        TokenType::KeywordImport,
        TokenType::KeywordControl,
        TokenType::KeywordOperator,
        TokenType::KeywordFunction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenType::None => "None",
            TokenType::Keyword => "Keyword",
            TokenType::Whitespace => "Whitespace",
            TokenType::NewLine => "NewLine",
            TokenType::VariableName => "VariableName",
            TokenType::Punctuation => "Punctuation",
            TokenType::String => "String",
            TokenType::Numeric => "Numeric",
            TokenType::Attribute => "Attribute",
            TokenType::KeywordReturn => "KeywordReturn",
            TokenType::LanguageConstant => "LanguageConstant",
            TokenType::KeywordImport => "KeywordImport",
            TokenType::KeywordControl => "KeywordControl",
            TokenType::KeywordOperator => "KeywordOperator",
            TokenType::KeywordFunction => "KeywordFunction",
        }
    }

    /// Stable numeric code for this type.
    pub fn code(self) -> u32 {
        match self {
            TokenType::None => 99999999,
            TokenType::Keyword => 951,
            TokenType::Whitespace => 0,
            TokenType::NewLine => 771,
            TokenType::VariableName => 2,
            TokenType::Punctuation => 3,
            TokenType::String => 4,
            TokenType::Numeric => 5,
            TokenType::Attribute => 6,
            TokenType::KeywordReturn => 8,
            TokenType::LanguageConstant => 9,
            TokenType::KeywordImport => 10,
            TokenType::KeywordControl => 11,
            TokenType::KeywordOperator => 12,
            TokenType::KeywordFunction => 13,
        }
    }

    pub fn from_code(code: u32) -> Option<TokenType> {
        TokenType::ALL.into_iter().find(|tt| tt.code() == code)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::ALL
            .into_iter()
            .find(|tt| tt.name() == s)
            .ok_or_else(|| format!("unknown token type {:?}", s))
    }
}

/// A classified span of a line.
///
/// Tokens don't carry their text or position: a token starts where the previous
/// one ended, and the first starts at column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub token_type: TokenType,
    /// Length in characters (Unicode scalar values).
    pub length: usize,
}

impl Token {
    pub fn new(token_type: TokenType, length: usize) -> Self {
        Token { token_type, length }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.token_type, self.length)
    }
}
