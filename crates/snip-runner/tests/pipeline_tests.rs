//! End-to-end tests for `run`: validation, evaluation, failure wrapping,
//! the no-output message, the serialized result and idempotence.

use pretty_assertions::assert_eq;
use snip_runner::{run, run_to_result, run_with_config, RunConfig, RunResult, NO_OUTPUT_MESSAGE};
use snip_types::{Dialect, ErrorKind, RunError};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn py(source: &str) -> Result<String, RunError> {
    snip_runner::init_tracing();
    run(source, Dialect::Python)
}

fn go(source: &str) -> Result<String, RunError> {
    snip_runner::init_tracing();
    run(source, Dialect::Go)
}

const GO_HELLO: &str = "package main

import \"fmt\"

func main() {
    fmt.Println(\"Hello, World!\")
}";

// ══════════════════════════════════════════════════════════════════════════════
// Shared
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn whitespace_only_is_empty_source_for_both_dialects() {
    for src in ["", "   ", "\n\n", " \t\r\n "] {
        assert_eq!(py(src), Err(RunError::EmptySource), "python {src:?}");
        assert_eq!(go(src), Err(RunError::EmptySource), "go {src:?}");
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Python
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn python_hello_world_template() {
    assert_eq!(
        py("# Enter your Python code here\nprint(\"Hello, World!\")"),
        Ok("Hello, World!\n".into())
    );
}

#[test]
fn python_unclosed_print() {
    assert_eq!(py("print(\"hi\""), Err(RunError::UnclosedPrintCall));
}

#[test]
fn python_repeat_variable() {
    assert_eq!(py("x = \"ab\"\nprint(x*3)"), Ok("ababab\n".into()));
}

#[test]
fn python_no_print_yields_message() {
    assert_eq!(py("x = 1"), Ok(NO_OUTPUT_MESSAGE.into()));
}

#[test]
fn python_invalid_assignment_names_the_line() {
    let err = py("print(greeting)\ngreeting = ").unwrap_err();
    assert_eq!(
        err,
        RunError::InvalidAssignment {
            line: "greeting = ".into()
        }
    );
    assert_eq!(err.to_string(), "Invalid assignment: greeting = ");
}

#[test]
fn python_blank_value_followed_by_code_is_not_stored() {
    assert_eq!(py("x = \nprint(x)"), Ok("x\n".into()));
}

#[test]
fn python_radix_and_infinite_numbers_are_stored() {
    assert_eq!(py("x = 0x10\nprint(x)"), Ok("16\n".into()));
    assert_eq!(py("b = 0b11\no = 0o17\nprint(b)\nprint(o)"), Ok("3\n15\n".into()));
    assert_eq!(py("x = Infinity\nprint(x)"), Ok("Infinity\n".into()));
    assert_eq!(py("x = -1e999\nprint(x)"), Ok("-Infinity\n".into()));
}

#[test]
fn python_infinite_repeat_count_is_execution_failure() {
    assert_eq!(
        py("n = Infinity\nprint('a' * n)"),
        Err(RunError::ExecutionFailure {
            cause: "invalid count value: Infinity".into()
        })
    );
}

#[test]
fn go_hex_number_is_stored() {
    let src = "package main\nimport \"fmt\"\nfunc main() {\n    n := 0xff\n    fmt.Println(n)\n}";
    assert_eq!(go(src), Ok("255\n".into()));
}

#[test]
fn python_several_prints_in_order() {
    let src = "name = 'snip'\nn = 2\nprint(name)\nprint(n)\nprint(\"=\" * 5)\nprint(unknown)";
    assert_eq!(py(src), Ok("snip\n2\n=====\nunknown\n".into()));
}

#[test]
fn python_execution_failure_is_wrapped() {
    let err = py("n = 3\nprint(n * 2)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
    assert_eq!(
        err.to_string(),
        "Execution error: cannot repeat 'n': expected a string, found a number"
    );
    assert!(!err.is_validation());
}

#[test]
fn python_negative_count_is_execution_failure() {
    assert_eq!(
        py("print('a' * -3)"),
        Err(RunError::ExecutionFailure {
            cause: "invalid count value: -3".into()
        })
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Go
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn go_hello_world_template() {
    assert_eq!(go(GO_HELLO), Ok("Hello, World!\n".into()));
}

#[test]
fn go_one_line_main() {
    let out = go("package main\nimport \"fmt\"\nfunc main(){fmt.Println(\"hi\")}").unwrap();
    assert!(out.contains("hi\n"));
}

#[test]
fn go_missing_package() {
    assert_eq!(
        go("import \"fmt\"\nfunc main() { fmt.Println(1) }"),
        Err(RunError::MissingPackageDeclaration)
    );
}

#[test]
fn go_missing_import() {
    assert_eq!(
        go("package main\nfunc main() { fmt.Println(1) }"),
        Err(RunError::MissingImport)
    );
}

#[test]
fn go_missing_println() {
    assert_eq!(
        go("package main\nimport \"fmt\"\nfunc main() {}"),
        Err(RunError::NoPrintStatement)
    );
}

#[test]
fn go_repeat_without_strings_import() {
    let src = "package main\nimport \"fmt\"\nfunc main() {\n    fmt.Println(strings.Repeat(\"ab\", 3))\n}";
    let err = go(src).unwrap_err();
    assert_eq!(err, RunError::MissingStringsImport);
    let msg = err.to_string();
    assert!(msg.contains("import \"strings\""));
    assert!(msg.contains("import (\n    \"fmt\"\n    \"strings\"\n)"));
}

#[test]
fn go_repeat_with_block_import() {
    let src = "package main\n\nimport (\n\t\"fmt\"\n\t\"strings\"\n)\n\nfunc main() {\n\tfmt.Println(strings.Repeat(\"ab\", 3))\n}";
    assert_eq!(go(src), Ok("ababab\n".into()));
}

#[test]
fn go_repeat_with_variable_prints_nothing() {
    let src = "package main\nimport \"fmt\"\nimport \"strings\"\nfunc main() {\n    s := \"ab\"\n    fmt.Println(strings.Repeat(s, 3))\n}";
    assert_eq!(go(src), Ok(NO_OUTPUT_MESSAGE.into()));
}

#[test]
fn go_variables() {
    let src = "package main\nimport \"fmt\"\nfunc main() {\n    n := 42\n    fmt.Println(n)\n}";
    assert_eq!(go(src), Ok("42\n".into()));
}

// ══════════════════════════════════════════════════════════════════════════════
// Configuration and serialized result
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn custom_no_output_message() {
    let config = RunConfig {
        no_output_message: "(nothing)".into(),
        ..RunConfig::default()
    };
    assert_eq!(
        run_with_config("x = 1", Dialect::Python, &config),
        Ok("(nothing)".into())
    );
}

#[test]
fn output_limit_is_execution_failure() {
    let config = RunConfig {
        max_output_bytes: 16,
        ..RunConfig::default()
    };
    let err = run_with_config("print('x' * 100)", Dialect::Python, &config).unwrap_err();
    assert_eq!(
        err,
        RunError::ExecutionFailure {
            cause: "output exceeds the limit of 16 bytes".into()
        }
    );
}

#[test]
fn result_json_on_success() {
    let result = run_to_result("print('hi')", Dialect::Python, &RunConfig::default());
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": true, "output": "hi\n", "error": null })
    );
}

#[test]
fn result_json_on_failure() {
    let result = run_to_result("package main", Dialect::Go, &RunConfig::default());
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "output": null,
            "error": { "kind": "MissingImport", "message": "Error: missing imports" }
        })
    );
    let back: RunResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

// ══════════════════════════════════════════════════════════════════════════════
// Idempotence
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn run_determinism_100_iterations() {
    let cases = [
        ("x = \"ab\"\nprint(x*3)", Dialect::Python),
        ("print(\"hi\"", Dialect::Python),
        ("x = 1", Dialect::Python),
        (GO_HELLO, Dialect::Go),
        ("package main", Dialect::Go),
    ];
    for (src, dialect) in cases {
        let first = run(src, dialect);
        for i in 0..100 {
            assert_eq!(first, run(src, dialect), "Determinism failure at iteration {i}");
        }
    }
}

#[test]
fn runs_do_not_share_variables() {
    assert_eq!(py("secret = 'a'\nprint(secret)"), Ok("a\n".into()));
    assert_eq!(py("print(secret)"), Ok("secret\n".into()));
}
