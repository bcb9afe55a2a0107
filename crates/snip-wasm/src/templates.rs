//! Editor-facing text: starter snippets and the output pane report.

use snip_runner::{run_to_result, RunConfig, RunResult};
use snip_types::Dialect;

const PYTHON_TEMPLATE: &str = "# Enter your Python code here\nprint(\"Hello, World!\")";

const GO_TEMPLATE: &str = "// Enter your Go code here
package main

import \"fmt\"

func main() {
    fmt.Println(\"Hello, World!\")
}";

/// The snippet an editor shows when a dialect is first selected.
pub fn default_snippet(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Python => PYTHON_TEMPLATE,
        Dialect::Go => GO_TEMPLATE,
    }
}

/// The checks the editor's Run button makes before running anything.
///
/// These are stricter than the validators: a Python snippet without any
/// `print(` is refused here, while `run` accepts it and reports no output.
fn run_button_check(source: &str, dialect: Dialect) -> Option<&'static str> {
    if source.trim().is_empty() {
        return Some("Error: empty code");
    }
    match dialect {
        Dialect::Python if !source.contains("print(") => {
            Some("Error: code must contain at least one print() command")
        }
        Dialect::Go if !source.contains("package main") => {
            Some("Error: Go code must start with \"package main\"")
        }
        _ => None,
    }
}

/// Press Run: check the snippet, run it, and return the output pane text.
pub fn render_editor_run(source: &str, dialect: Dialect, config: &RunConfig) -> String {
    match run_button_check(source, dialect) {
        Some(message) => error_pane(message),
        None => render_report(&run_to_result(source, dialect, config)),
    }
}

/// Text for the output pane.
pub fn render_report(result: &RunResult) -> String {
    match (&result.output, &result.error) {
        (Some(output), _) if result.success => {
            format!("=== Execution Result ===\n{output}\n[Program executed successfully]")
        }
        (_, Some(error)) => error_pane(&error.message),
        // Unreachable through `RunResult::from`, but the type allows it.
        _ => error_pane("No result"),
    }
}

fn error_pane(message: &str) -> String {
    format!("❌ EXECUTION ERROR ❌\n\n{message}\n\nPlease fix the code and try again.")
}
