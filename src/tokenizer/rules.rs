//! The rule table.
//!
//! For each state, an ordered list of rules. Each rule is an anchored pattern,
//! what to emit when it matches, and the state to continue in.
//! The first rule that matches wins; order is precedence, not match length.

use ::regex::Regex;

use super::keyword;
use crate::state::LineState;
use crate::token::TokenType;

/// What a matching rule produces.
#[derive(Clone, Copy)]
pub(super) enum Action {
    Emit(TokenType),
    /// Decide the type from the matched lexeme.
    Classify(fn(&str) -> TokenType),
}

impl Action {
    pub(super) fn token_type(self, lexeme: &str) -> TokenType {
        match self {
            Action::Emit(tt) => tt,
            Action::Classify(classifier) => classifier(lexeme),
        }
    }
}

pub(super) struct Rule {
    pub name: &'static str,
    pattern: fn() -> &'static Regex,
    pub action: Action,
    pub next: LineState,
}

impl Rule {
    /// The non-empty prefix of `input` this rule matches, if any.
    pub(super) fn find<'a>(&self, input: &'a str) -> Option<&'a str> {
        (self.pattern)()
            .find(input)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// The rules for `state`, in precedence order.
///
/// Returns `None` for the uninitialized state, which nothing should tokenize from.
pub(super) fn rules_for(state: LineState) -> Option<&'static [Rule]> {
    match state {
        LineState::None => None,
        LineState::TopLevelContent => Some(TOP_LEVEL),
        LineState::InsideSingleQuoteString => Some(SINGLE_QUOTED),
        LineState::InsideDoubleQuoteString => Some(DOUBLE_QUOTED),
        // TODO: rules for """...""" strings; until then nothing transitions here.
        LineState::InsideTripleQuoteString => Some(&[]),
    }
}

const TOP_LEVEL: &[Rule] = &[
    Rule {
        name: "whitespace",
        pattern: regex::whitespace,
        action: Action::Emit(TokenType::Whitespace),
        next: LineState::TopLevelContent,
    },
    // Must come before identifiers; every reserved word is also identifier-shaped.
    Rule {
        name: "reserved word",
        pattern: regex::reserved_word,
        action: Action::Classify(keyword::classify),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "identifier",
        pattern: regex::identifier,
        action: Action::Emit(TokenType::VariableName),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "punctuation",
        pattern: regex::punctuation,
        action: Action::Emit(TokenType::Punctuation),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "numeric",
        pattern: regex::numeric,
        action: Action::Emit(TokenType::Numeric),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "open single quote",
        pattern: regex::single_quote,
        action: Action::Emit(TokenType::Punctuation),
        next: LineState::InsideSingleQuoteString,
    },
    Rule {
        name: "open double quote",
        pattern: regex::double_quote,
        action: Action::Emit(TokenType::Punctuation),
        next: LineState::InsideDoubleQuoteString,
    },
];

const SINGLE_QUOTED: &[Rule] = &[
    Rule {
        name: "close single quote",
        pattern: regex::single_quote,
        action: Action::Emit(TokenType::Punctuation),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "single-quoted content",
        pattern: regex::single_quoted_content,
        action: Action::Emit(TokenType::String),
        next: LineState::InsideSingleQuoteString,
    },
];

const DOUBLE_QUOTED: &[Rule] = &[
    Rule {
        name: "close double quote",
        pattern: regex::double_quote,
        action: Action::Emit(TokenType::Punctuation),
        next: LineState::TopLevelContent,
    },
    Rule {
        name: "double-quoted content",
        pattern: regex::double_quoted_content,
        action: Action::Emit(TokenType::String),
        next: LineState::InsideDoubleQuoteString,
    },
];

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    use crate::tokenizer::keyword::RESERVED_WORDS;

    pub(super) fn whitespace() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // The ECMAScript whitespace set, not Unicode White_Space:
            // U+FEFF is whitespace here and U+0085 is not.
            Regex::new(
                r"\A[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
            )
            .expect("could not compile regex for whitespace")
        })
    }

    pub(super) fn reserved_word() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // A reserved word only counts if it isn't followed by an ASCII word character:
            // "end" is a keyword, "endpoint" is not. Non-ASCII letters end the word,
            // so "inα" is `in` then `α`.
            Regex::new(&format!(r"\A(?:{})(?-u:\b)", RESERVED_WORDS.join("|")))
                .expect("could not compile regex for reserved words")
        })
    }

    pub(super) fn identifier() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // Anything from U+00A1 up counts as a letter.
            Regex::new(r"\A[A-Za-z_\x{A1}-\x{10FFFF}][A-Za-z_0-9\x{A1}-\x{10FFFF}]*")
                .expect("could not compile regex for identifier")
        })
    }

    pub(super) fn punctuation() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[:,;{}\[\].=()>^+\-<?]").expect("could not compile regex for punctuation")
        })
    }

    pub(super) fn numeric() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A[0-9]+").expect("could not compile regex for numeric"))
    }

    pub(super) fn single_quote() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A'").expect("could not compile regex for single quote"))
    }

    pub(super) fn double_quote() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r#"\A""#).expect("could not compile regex for double quote"))
    }

    pub(super) fn single_quoted_content() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[^']+").expect("could not compile regex for single-quoted content")
        })
    }

    pub(super) fn double_quoted_content() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r#"\A[^"]+"#).expect("could not compile regex for double-quoted content")
        })
    }
}
