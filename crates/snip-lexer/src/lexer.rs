//! Line scanner for the snip dialects.
//!
//! Features:
//! - Assignment-shaped lines: `name = value` at column 0 (Python) or
//!   `name := value` after optional indentation (Go)
//! - Print-like calls anywhere on a line, argument running to the next `)`
//! - Go `fmt.Println(strings.Repeat(...))` keeps the inner call's own `)`
//! - Calls never span lines; a call opener with no `)` after it on the same
//!   line is not a call
//!
//! Scanning never fails. Deciding what a token means is the parser's job.

use snip_types::{Dialect, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// The parts of an assignment-shaped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentMatch<'a> {
    /// The assigned identifier.
    pub name: &'a str,
    /// Everything after the operator, untrimmed. Never empty.
    pub value: &'a str,
    /// Byte offset of `name` within the line.
    pub offset: usize,
}

/// Match one line against the dialect's assignment shape.
///
/// Python: `^[A-Za-z_][A-Za-z0-9_]*\s*=` followed by at least one character.
/// Go: the same with optional leading whitespace and `:=`.
pub fn match_assignment(line: &str, dialect: Dialect) -> Option<AssignmentMatch<'_>> {
    let offset = match dialect {
        Dialect::Python => 0,
        Dialect::Go => line.len() - line.trim_start().len(),
    };
    let rest = &line[offset..];
    let (name, after_name) = rest.split_at(identifier_len(rest)?);
    let value = after_name
        .trim_start()
        .strip_prefix(dialect.assign_operator())?;
    if value.is_empty() {
        return None;
    }
    Some(AssignmentMatch {
        name,
        value,
        offset,
    })
}

/// Byte length of the ASCII identifier at the start of `text`, if any.
fn identifier_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    Some(
        bytes
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count(),
    )
}

/// 1-based character column of a byte offset.
fn column(line: &str, byte_offset: usize) -> u32 {
    line[..byte_offset].chars().count() as u32 + 1
}

/// The snip lexer.
///
/// Converts a [`SourceFile`] into a vector of [`Token`]s for one dialect.
pub struct Lexer<'src> {
    source_file: &'src SourceFile,
    dialect: Dialect,
}

impl<'src> Lexer<'src> {
    pub fn new(source_file: &'src SourceFile, dialect: Dialect) -> Self {
        Self {
            source_file,
            dialect,
        }
    }

    /// Lex the whole snippet. The stream always ends with [`TokenKind::Eof`].
    pub fn lex(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (line_no, line) in self.source_file.numbered_lines() {
            if let Some(token) = self.scan_assignment(line_no, line) {
                tokens.push(token);
            }
            self.scan_print_calls(line_no, line, &mut tokens);
        }
        let eof_line = self.source_file.line_count() as u32 + 1;
        tokens.push(Token::new(TokenKind::Eof, Span::point(eof_line, 1)));
        tokens
    }

    fn scan_assignment(&self, line_no: u32, line: &str) -> Option<Token> {
        let m = match_assignment(line, self.dialect)?;
        let span = Span::on_line(
            line_no,
            column(line, m.offset),
            line.chars().count() as u32,
        );
        Some(Token::new(
            TokenKind::Assignment {
                name: m.name.to_string(),
                value: m.value.to_string(),
            },
            span,
        ))
    }

    fn scan_print_calls(&self, line_no: u32, line: &str, tokens: &mut Vec<Token>) {
        let opener = self.dialect.print_opener();
        let mut cursor = 0;
        while let Some(found) = line[cursor..].find(opener) {
            let start = cursor + found;
            let arg_start = start + opener.len();
            let Some(close) = line[arg_start..].find(')') else {
                break;
            };
            let mut arg_end = arg_start + close;
            if self.dialect == Dialect::Go {
                arg_end = include_repeat_close(line, arg_start, arg_end);
            }
            let span = Span::on_line(line_no, column(line, start), column(line, arg_end));
            tokens.push(Token::new(
                TokenKind::PrintCall(line[arg_start..arg_end].to_string()),
                span,
            ));
            cursor = arg_end + 1;
        }
    }
}

/// When the argument opens a `strings.Repeat(` call, the first `)` closes
/// that inner call. Extend to the next `)` so the argument is the full call.
// Cutting at the first `)` would mean Go repeats never print. This is listed
// under "Behavior changes to confirm" in DESIGN.md.
fn include_repeat_close(line: &str, arg_start: usize, arg_end: usize) -> usize {
    if !line[arg_start..arg_end].contains("strings.Repeat(") {
        return arg_end;
    }
    match line[arg_end + 1..].find(')') {
        Some(next) => arg_end + 1 + next,
        None => arg_end,
    }
}
