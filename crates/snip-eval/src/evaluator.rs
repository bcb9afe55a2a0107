//! Context construction and print resolution.

use crate::env::VariableContext;
use crate::error::{EvalError, EvalResult};
use snip_types::ast::*;
use snip_types::{format_number, parse_number, Span, Value};

/// Default cap on produced output: 1 MiB.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1 << 20;

/// What a single print statement did.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// The operand named a variable; its value was printed.
    Resolved { name: String, value: Value },
    /// The operand is not a known name; printed as a literal.
    UnresolvedLiteral(String),
    /// A repetition: `text` printed `count` times on one line.
    Repeated { text: String, count: usize },
    /// A Go `strings.Repeat` the pattern could not read. Prints nothing.
    Skipped(String),
}

impl Emission {
    /// The output line, or `None` for [`Emission::Skipped`].
    pub fn line(&self) -> Option<String> {
        match self {
            Self::Resolved { value, .. } => Some(value.to_string()),
            Self::UnresolvedLiteral(text) => Some(text.clone()),
            Self::Repeated { text, count } => Some(text.repeat(*count)),
            Self::Skipped(_) => None,
        }
    }
}

/// An emission tagged with the print statement it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub span: Span,
    pub emission: Emission,
}

/// Everything one evaluation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub context: VariableContext,
    pub emissions: Vec<Emitted>,
}

impl Evaluation {
    /// Output lines in source order, skipped prints omitted.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.emissions.iter().filter_map(|e| e.emission.line())
    }

    /// Every line followed by `\n`, or `None` when nothing was printed.
    pub fn output(&self) -> Option<String> {
        let mut lines = self.lines().peekable();
        lines.peek()?;
        Some(lines.fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        }))
    }
}

/// The snip evaluator.
///
/// All assignments are bound before any print is resolved, so a print sees
/// the last value assigned anywhere in the snippet.
pub struct Evaluator {
    context: VariableContext,
    max_output_bytes: usize,
    /// Bytes produced so far, newlines included.
    output_bytes: usize,
}

impl Evaluator {
    pub fn new(max_output_bytes: usize) -> Self {
        Self {
            context: VariableContext::new(),
            max_output_bytes,
            output_bytes: 0,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        dialect = %program.dialect,
        stmts = program.stmts.len(),
    ))]
    pub fn evaluate(mut self, program: &Program) -> EvalResult<Evaluation> {
        for assignment in program.assignments() {
            self.bind(assignment);
        }
        tracing::debug!(bindings = self.context.len(), "context built");

        let mut emissions = Vec::new();
        for print in program.prints() {
            let emission = self.eval_print(print)?;
            emissions.push(Emitted {
                span: print.span,
                emission,
            });
        }
        Ok(Evaluation {
            context: self.context,
            emissions,
        })
    }

    fn bind(&mut self, assignment: &Assignment) {
        match assignment.value.to_value() {
            Some(value) => self.context.define(&assignment.name.name, value),
            None => tracing::debug!(
                name = %assignment.name.name,
                span = %assignment.span,
                "unsupported value, not stored"
            ),
        }
    }

    fn eval_print(&mut self, print: &PrintStmt) -> EvalResult<Emission> {
        let emission = match &print.arg {
            PrintArg::Operand(operand) => match self.context.get(&operand.text) {
                Some(value) => Emission::Resolved {
                    name: operand.text.clone(),
                    value: value.clone(),
                },
                None => Emission::UnresolvedLiteral(operand.literal.clone()),
            },
            PrintArg::Repeat { text, count } => Emission::Repeated {
                text: self.repeat_text(text)?,
                count: self.repeat_count(count)?,
            },
            PrintArg::RepeatCall(call) => Emission::Repeated {
                text: call.text.clone(),
                count: count_from_number(parse_number(&call.count).unwrap_or(f64::MAX))?,
            },
            PrintArg::UnmatchedRepeatCall(expr) => {
                tracing::debug!(expr = %expr, span = %print.span, "strings.Repeat not matched, skipped");
                Emission::Skipped(expr.clone())
            }
        };
        self.charge(&emission)?;
        Ok(emission)
    }

    fn repeat_text(&self, operand: &Operand) -> EvalResult<String> {
        match self.context.get(&operand.text) {
            Some(Value::Str(s)) => Ok(s.clone()),
            Some(other) => Err(EvalError::RepeatNonString {
                name: operand.text.clone(),
                found: other.type_name(),
            }),
            None => Ok(operand.literal.clone()),
        }
    }

    /// Variable (number, or string read as a number), else the leading
    /// integer of the literal text. Unreadable counts repeat zero times.
    fn repeat_count(&self, operand: &Operand) -> EvalResult<usize> {
        let n = match self.context.get(&operand.text) {
            Some(Value::Number(n)) => *n,
            Some(Value::Str(s)) => parse_number(s).unwrap_or(f64::NAN),
            None => parse_int_prefix(&operand.text).unwrap_or(f64::NAN),
        };
        count_from_number(n)
    }

    /// Account for an emission's line against the output cap before it is
    /// materialised.
    fn charge(&mut self, emission: &Emission) -> EvalResult<()> {
        let len = match emission {
            Emission::Resolved { value, .. } => value.to_string().len(),
            Emission::UnresolvedLiteral(text) => text.len(),
            Emission::Repeated { text, count } => text.len().saturating_mul(*count),
            Emission::Skipped(_) => return Ok(()),
        };
        let total = self
            .output_bytes
            .saturating_add(len)
            .saturating_add(1);
        if total > self.max_output_bytes {
            return Err(EvalError::OutputLimitExceeded {
                limit: self.max_output_bytes,
            });
        }
        self.output_bytes = total;
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OUTPUT_BYTES)
    }
}

/// Truncate toward zero. NaN counts as zero; negative and infinite counts
/// are errors.
fn count_from_number(n: f64) -> EvalResult<usize> {
    if n.is_nan() {
        return Ok(0);
    }
    let n = n.trunc();
    if n < 0.0 || n.is_infinite() {
        return Err(EvalError::InvalidRepeatCount(format_number(n)));
    }
    // Saturates; the output cap rejects anything that large.
    Ok(n as usize)
}

/// Leading optionally-signed decimal integer, ignoring leading whitespace:
/// `"3"` → 3, `"4abc"` → 4, `"-2"` → -2, `"abc"` → `None`.
fn parse_int_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    digits[..len].parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("3"), Some(3.0));
        assert_eq!(parse_int_prefix(" 4abc"), Some(4.0));
        assert_eq!(parse_int_prefix("3.9"), Some(3.0));
        assert_eq!(parse_int_prefix("-2"), Some(-2.0));
        assert_eq!(parse_int_prefix("+5"), Some(5.0));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_count_from_number() {
        assert_eq!(count_from_number(3.0), Ok(3));
        assert_eq!(count_from_number(2.7), Ok(2));
        assert_eq!(count_from_number(-0.5), Ok(0));
        assert_eq!(count_from_number(f64::NAN), Ok(0));
        assert_eq!(
            count_from_number(-1.0),
            Err(EvalError::InvalidRepeatCount("-1".into()))
        );
        assert_eq!(
            count_from_number(f64::INFINITY),
            Err(EvalError::InvalidRepeatCount("Infinity".into()))
        );
    }

    #[test]
    fn test_emission_lines() {
        assert_eq!(
            Emission::Repeated {
                text: "ab".into(),
                count: 3
            }
            .line(),
            Some("ababab".into())
        );
        assert_eq!(
            Emission::Resolved {
                name: "n".into(),
                value: Value::Number(4.0)
            }
            .line(),
            Some("4".into())
        );
        assert_eq!(Emission::Skipped("strings.Repeat(s, 2)".into()).line(), None);
    }

    #[test]
    fn test_charge_rejects_oversized_output() {
        let mut ev = Evaluator::new(8);
        assert!(ev.charge(&Emission::UnresolvedLiteral("1234567".into())).is_ok());
        assert_eq!(
            ev.charge(&Emission::UnresolvedLiteral("x".into())),
            Err(EvalError::OutputLimitExceeded { limit: 8 })
        );
    }

    #[test]
    fn test_charge_ignores_skipped() {
        let mut ev = Evaluator::new(0);
        assert!(ev.charge(&Emission::Skipped("x".into())).is_ok());
    }
}
