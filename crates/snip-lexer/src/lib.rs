//! snip lexer: converts snippet text into a token stream.

pub mod lexer;
pub mod token;

pub use lexer::{match_assignment, AssignmentMatch, Lexer};
pub use token::{Token, TokenKind};
