//! Classification of Julia's reserved words.

use crate::token::TokenType;

/// Every reserved word the tokenizer recognizes.
///
/// The reserved-word rule is built from this list, so anything here is guaranteed
/// to reach [`classify`].
pub const RESERVED_WORDS: [&str; 32] = [
    "baremodule",
    "begin",
    "break",
    "catch",
    "ccall",
    "const",
    "continue",
    "do",
    "else",
    "elseif",
    "end",
    "export",
    "false",
    "finally",
    "for",
    "function",
    "global",
    "if",
    "import",
    "in",
    "isa",
    "let",
    "local",
    "macro",
    "module",
    "quote",
    "return",
    "true",
    "try",
    "using",
    "where",
    "while",
];

/// Map a reserved word to its category.
///
/// Anything that isn't a reserved word is a plain identifier.
pub fn classify(word: &str) -> TokenType {
    match word {
        "true" | "false" => TokenType::LanguageConstant,
        "import" | "export" => TokenType::KeywordImport,
        "begin" | "break" | "catch" | "continue" | "do" | "else" | "elseif" | "end"
        | "finally" | "for" | "if" | "try" | "while" => TokenType::KeywordControl,
        "return" => TokenType::KeywordReturn,
        "in" => TokenType::KeywordOperator,
        "function" => TokenType::KeywordFunction,
        "baremodule" | "ccall" | "const" | "global" | "isa" | "let" | "local" | "macro"
        | "module" | "quote" | "using" | "where" => TokenType::Keyword,
        _ => TokenType::VariableName,
    }
}
