//! Literal helpers shared by assignment and print parsing.

use snip_types::ast::RepeatCall;

const REPEAT_OPENER: &str = "strings.Repeat(\"";

/// Remove the first and last character, whatever they are.
///
/// Assigned values that start with a quote go through this. A lone
/// character becomes the empty string.
pub fn strip_edge_chars(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

/// Remove one pair of outer quote characters.
///
/// Both ends must be `"` or `'`, not necessarily the same one. Anything
/// else is returned unchanged.
pub fn strip_outer_quotes(text: &str) -> String {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if is_quote(first) && is_quote(last) => {
            chars.as_str().to_string()
        }
        _ => text.to_string(),
    }
}

/// Find `strings.Repeat("<text>", <digits>)` anywhere in `expr`.
///
/// `<text>` is one or more characters without `"`. Whitespace is allowed
/// after the comma and nowhere else.
pub fn match_repeat_call(expr: &str) -> Option<RepeatCall> {
    expr.match_indices(REPEAT_OPENER)
        .find_map(|(idx, _)| match_repeat_args(&expr[idx + REPEAT_OPENER.len()..]))
}

fn match_repeat_args(rest: &str) -> Option<RepeatCall> {
    let close_quote = rest.find('"').filter(|&i| i > 0)?;
    let text = &rest[..close_quote];
    let after_comma = rest[close_quote + 1..].strip_prefix(',')?.trim_start();
    let digits = after_comma
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 || !after_comma[digits..].starts_with(')') {
        return None;
    }
    Some(RepeatCall {
        text: text.to_string(),
        count: after_comma[..digits].to_string(),
    })
}
