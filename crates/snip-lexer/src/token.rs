//! Token types for the snip lexer.
//!
//! The dialects have no expression grammar worth tokenizing character by
//! character, so a token is a whole recognised construct: an
//! assignment-shaped line or one print-like call.

use snip_types::Span;
use std::fmt;

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `name = value` / `name := value`. `value` is the raw text after the
    /// operator, untrimmed.
    Assignment { name: String, value: String },
    /// `print(...)` / `fmt.Println(...)`. Carries the raw argument text.
    PrintCall(String),
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { name, .. } => write!(f, "assignment to '{name}'"),
            Self::PrintCall(arg) => write!(f, "print call '{arg}'"),
            Self::Eof => write!(f, "end of file"),
        }
    }
}
