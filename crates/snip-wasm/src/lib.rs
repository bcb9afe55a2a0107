//! snip runner as a WASM module for browser environments.
//!
//! This crate exposes the snippet runner via `wasm-bindgen` for the editor
//! page. The editor owns the widget, the language selector and any
//! "Executing..." delay; it calls in with the snippet text and a dialect tag.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run, renderRun, defaultSnippet } from 'snip-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(run('x = "ab"\nprint(x*3)', "python"));
//! // { success: true, output: "ababab\n", error: null }
//! ```

mod templates;

use snip_runner::{run_to_result, RunConfig, RunResult};
use snip_types::{Dialect, UnknownDialect};
use wasm_bindgen::prelude::*;

pub use templates::{default_snippet, render_editor_run, render_report};

/// Run a snippet and return the result as a JSON string.
///
/// ```json
/// { "success": true, "output": "hi\n", "error": null }
/// { "success": false, "output": null, "error": { "kind": "MissingImport", "message": "..." } }
/// ```
///
/// Throws only when `dialect` is neither `"python"` nor `"go"`.
#[wasm_bindgen]
pub fn run(source: &str, dialect: &str) -> Result<String, JsError> {
    Ok(run_json(source, dialect, &RunConfig::default())?)
}

/// Like [`run`], with a config object such as `{ max_output_bytes: 4096 }`.
/// Missing fields take their defaults; `undefined` means all defaults.
#[wasm_bindgen(js_name = runWithConfig)]
pub fn run_with_config(source: &str, dialect: &str, config: JsValue) -> Result<String, JsError> {
    let config: RunConfig = if config.is_undefined() || config.is_null() {
        RunConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    Ok(run_json(source, dialect, &config)?)
}

/// What the editor's Run button shows: its own pre-run checks, then the
/// runner's result, as output pane text.
#[wasm_bindgen(js_name = renderRun)]
pub fn render_run(source: &str, dialect: &str) -> Result<String, JsError> {
    let dialect: Dialect = dialect.parse()?;
    Ok(render_editor_run(source, dialect, &RunConfig::default()))
}

/// Starter snippet for the given dialect tag.
#[wasm_bindgen(js_name = defaultSnippet)]
pub fn default_snippet_for(dialect: &str) -> Result<String, JsError> {
    let dialect: Dialect = dialect.parse()?;
    Ok(default_snippet(dialect).to_string())
}

/// Return the runner version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse the dialect tag, run, and serialize the [`RunResult`].
pub fn run_json(source: &str, dialect: &str, config: &RunConfig) -> Result<String, UnknownDialect> {
    let dialect: Dialect = dialect.parse()?;
    Ok(to_json(&run_to_result(source, dialect, config)))
}

fn to_json(result: &RunResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"output":null,"error":{{"kind":"ExecutionFailure","message":"Serialization error: {}"}}}}"#,
            e
        )
    })
}
