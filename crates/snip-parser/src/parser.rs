//! Core parser infrastructure: token cursor and the statement loop.

use snip_lexer::token::{Token, TokenKind};
use snip_types::ast::{Program, Stmt};
use snip_types::{Dialect, Span};

/// The snip parser.
///
/// Consumes the token stream produced by the lexer and builds a
/// [`Program`]. Every token maps to exactly one statement, so parsing
/// cannot fail; unusable shapes become explicit variants instead.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    pub(crate) dialect: Dialect,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, dialect: Dialect) -> Self {
        Self {
            tokens,
            pos: 0,
            dialect,
        }
    }

    /// Parse the whole token stream.
    pub fn parse(mut self) -> Program {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.parse_statement() {
            stmts.push(stmt);
        }
        Program {
            dialect: self.dialect,
            stmts,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Advance the cursor by one and return the consumed token.
    ///
    /// Past the end of the stream this keeps returning `Eof`.
    fn advance(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => Token::new(TokenKind::Eof, Span::point(1, 1)),
        }
    }

    /// Parse the next statement, or `None` at end of input.
    fn parse_statement(&mut self) -> Option<Stmt> {
        let token = self.advance();
        match token.kind {
            TokenKind::Assignment { name, value } => Some(Stmt::Assign(
                self.parse_assignment(name, &value, token.span),
            )),
            TokenKind::PrintCall(arg) => Some(Stmt::Print(self.parse_print(&arg, token.span))),
            TokenKind::Eof => None,
        }
    }
}
