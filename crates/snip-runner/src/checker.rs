//! Per-dialect validators.
//!
//! Each validator checks the raw snippet against the dialect's minimal
//! structural requirements and stops at the first violated rule. Nothing
//! here looks at what a statement means; that is left to the parser and
//! evaluator.

use snip_lexer::match_assignment;
use snip_types::{Dialect, Result, RunError, SourceFile};

/// Validate a snippet for `dialect`.
pub fn validate(source: &SourceFile, dialect: Dialect) -> Result<()> {
    if source.is_blank() {
        return Err(RunError::EmptySource);
    }
    match dialect {
        Dialect::Python => validate_python(source),
        Dialect::Go => validate_go(source),
    }
}

fn validate_python(source: &SourceFile) -> Result<()> {
    let text = &source.source;
    if text.contains("print(") && !text.contains(')') {
        return Err(RunError::UnclosedPrintCall);
    }

    // An assignment-shaped line must still be one once trimmed. A value
    // that is only whitespace borrows the next non-blank line as its value,
    // so this fails only when nothing but whitespace follows the `=`.
    for (line_no, line) in source.numbered_lines() {
        if match_assignment(line, Dialect::Python).is_some()
            && match_assignment(line.trim(), Dialect::Python).is_none()
            && source.is_blank_after(line_no)
        {
            return Err(RunError::InvalidAssignment {
                line: line.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_go(source: &SourceFile) -> Result<()> {
    let text = &source.source;
    if !text.contains("package main") {
        return Err(RunError::MissingPackageDeclaration);
    }
    if !text.contains("import") {
        return Err(RunError::MissingImport);
    }
    if !text.contains("fmt.Println(") {
        return Err(RunError::NoPrintStatement);
    }
    if text.contains("strings.Repeat") && !imports_strings(source) {
        return Err(RunError::MissingStringsImport);
    }
    Ok(())
}

/// `import "strings"`, or an indented `"strings"` line inside an
/// `import ( ... )` block.
fn imports_strings(source: &SourceFile) -> bool {
    if source.source.contains("import \"strings\"") {
        return true;
    }
    let mut in_block = false;
    for (_, line) in source.numbered_lines() {
        let trimmed = line.trim();
        if in_block {
            if trimmed.starts_with(')') {
                in_block = false;
            } else if line.starts_with([' ', '\t']) && trimmed == "\"strings\"" {
                return true;
            }
        } else if trimmed.starts_with("import (") {
            in_block = true;
        }
    }
    false
}
