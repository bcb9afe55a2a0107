//! Typed statement list produced by the parser.
//!
//! Every node carries a [`Span`] for error reporting. Statements keep
//! source order.

use crate::{Dialect, Span, Value};

/// A parsed snippet: the recognised statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub dialect: Dialect,
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.stmts.iter().filter_map(|s| match s {
            Stmt::Assign(a) => Some(a),
            Stmt::Print(_) => None,
        })
    }

    pub fn prints(&self) -> impl Iterator<Item = &PrintStmt> {
        self.stmts.iter().filter_map(|s| match s {
            Stmt::Print(p) => Some(p),
            Stmt::Assign(_) => None,
        })
    }
}

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(Assignment),
    Print(PrintStmt),
}


/// `name = value` (Python) or `name := value` (Go).
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: Ident,
    pub value: AssignedValue,
    pub span: Span,
}

/// The classified right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignedValue {
    /// Value that started with a quote, first and last characters removed.
    Str(String),
    /// Value that parsed entirely as a number.
    Number(f64),
    /// Anything else. Never stored in the variable context.
    Unsupported(String),
}

impl AssignedValue {
    /// The value to bind, or `None` for [`AssignedValue::Unsupported`].
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Self::Str(s) => Some(Value::Str(s.clone())),
            Self::Number(n) => Some(Value::Number(*n)),
            Self::Unsupported(_) => None,
        }
    }
}

/// `print(arg)` or `fmt.Println(arg)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub arg: PrintArg,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrintArg {
    /// A bare name or literal: `print(x)`, `fmt.Println("hi")`.
    Operand(Operand),
    /// Python repetition: `print(text * count)`.
    Repeat { text: Operand, count: Operand },
    /// Go `strings.Repeat("<text>", <count>)` with a literal string and count.
    RepeatCall(RepeatCall),
    /// Go `strings.Repeat(...)` in any other shape, e.g. with a variable
    /// operand. Produces no output.
    UnmatchedRepeatCall(String),
}

/// An operand that is either a variable name or a literal.
///
/// Whether it names a variable is decided at evaluation time; `literal` is
/// what gets printed when it does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// Trimmed source text, used as the lookup key.
    pub text: String,
    /// `text` with one pair of outer quote characters removed, if present.
    pub literal: String,
}

/// The literal arguments of a Go `strings.Repeat` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatCall {
    pub text: String,
    /// Decimal digits exactly as written.
    pub count: String,
}
