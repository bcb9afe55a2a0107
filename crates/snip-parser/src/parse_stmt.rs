//! Statement parsing: assignments and print calls.

use crate::literal::{match_repeat_call, strip_edge_chars, strip_outer_quotes};
use crate::parser::Parser;
use snip_types::ast::*;
use snip_types::{parse_number, Dialect, Span};

impl Parser {
    /// `name = value` / `name := value`
    pub(crate) fn parse_assignment(&self, name: String, value: &str, span: Span) -> Assignment {
        let name_span = Span::on_line(
            span.start_line,
            span.start_col,
            span.start_col + name.chars().count() as u32 - 1,
        );
        Assignment {
            name: Ident::new(name, name_span),
            value: classify_value(value.trim()),
            span,
        }
    }

    /// `print(arg)` / `fmt.Println(arg)`
    pub(crate) fn parse_print(&self, arg: &str, span: Span) -> PrintStmt {
        let expr = arg.trim();
        let arg = match self.dialect {
            Dialect::Python => match expr.split_once('*') {
                Some((text, count)) => PrintArg::Repeat {
                    text: operand(text),
                    count: operand(count),
                },
                None => PrintArg::Operand(operand(expr)),
            },
            Dialect::Go if expr.contains("strings.Repeat") => match match_repeat_call(expr) {
                Some(call) => PrintArg::RepeatCall(call),
                None => PrintArg::UnmatchedRepeatCall(expr.to_string()),
            },
            Dialect::Go => PrintArg::Operand(operand(expr)),
        };
        PrintStmt { arg, span }
    }
}

/// Quoted → string with its edge characters removed; numeric → number;
/// anything else is kept as unsupported.
fn classify_value(value: &str) -> AssignedValue {
    if value.starts_with('"') || value.starts_with('\'') {
        AssignedValue::Str(strip_edge_chars(value))
    } else if let Some(n) = parse_number(value) {
        AssignedValue::Number(n)
    } else {
        AssignedValue::Unsupported(value.to_string())
    }
}

fn operand(text: &str) -> Operand {
    let text = text.trim();
    Operand {
        text: text.to_string(),
        literal: strip_outer_quotes(text),
    }
}
