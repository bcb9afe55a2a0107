use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar stored in the variable context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Number(f64),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Number(_) => "number",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// Parse text that is entirely a number, with surrounding whitespace ignored.
///
/// Accepted forms:
/// - decimal, optionally signed: `42`, `-3.5`, `1e3`, `.5`, `1e999`
/// - `Infinity`, optionally signed
/// - unsigned `0x`, `0o` and `0b` integers of any size
///
/// Empty text is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(n) = parse_radix_integer(text) {
        return Some(n);
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    // Overflowing exponents parse to infinity.
    text.parse::<f64>().ok()
}

/// `0x1F`, `0o17`, `0b101` (either letter case). No sign, no separators.
fn parse_radix_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    text[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Render a number the way a browser console would: `3` rather than `3.0`,
/// the shortest digits that round-trip, exponent notation outside
/// `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    n.to_string()
}
