//! snip runner: orchestrates one run of a snippet.
//!
//! ```text
//! Source → Validator → Lexer → Parser → Evaluator → output | RunError
//! ```
//!
//! Validation failures are terminal: nothing is lexed or evaluated for a
//! snippet that fails its dialect's checks. Every evaluation failure is
//! surfaced as [`RunError::ExecutionFailure`].
//!
//! # Tracing
//!
//! Stages log through `tracing`. Call [`init_tracing`] once and set
//! `RUST_LOG=snip_runner=debug,snip_eval=debug` to see them.

pub mod checker;
pub mod config;

use serde::{Deserialize, Serialize};
use snip_eval::Evaluator;
use snip_lexer::Lexer;
use snip_parser::Parser;
use snip_types::{Dialect, ErrorKind, RunError, SourceFile};
use std::sync::Once;

pub use config::{RunConfig, NO_OUTPUT_MESSAGE};

/// Output text on success, a tagged failure otherwise.
pub type RunOutcome = Result<String, RunError>;

/// Run a snippet with the default configuration.
pub fn run(source: &str, dialect: Dialect) -> RunOutcome {
    run_with_config(source, dialect, &RunConfig::default())
}

/// Run a snippet.
///
/// On success returns every printed line followed by `\n`, or
/// `config.no_output_message` when nothing was printed.
#[tracing::instrument(level = "debug", skip_all, fields(dialect = %dialect, bytes = source.len()))]
pub fn run_with_config(source: &str, dialect: Dialect, config: &RunConfig) -> RunOutcome {
    let source_file = SourceFile::new(dialect.file_name(), source);
    checker::validate(&source_file, dialect)
        .inspect_err(|e| tracing::debug!(kind = %e.kind(), "validation failed"))?;

    let tokens = Lexer::new(&source_file, dialect).lex();
    tracing::trace!(tokens = tokens.len(), "lexed");
    let program = Parser::new(tokens, dialect).parse();

    let evaluation = Evaluator::new(config.max_output_bytes)
        .evaluate(&program)
        .map_err(|e| {
            tracing::debug!(error = %e, "evaluation failed");
            RunError::execution(e)
        })?;

    Ok(evaluation
        .output()
        .unwrap_or_else(|| config.no_output_message.clone()))
}

/// A failure as seen across the browser boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&RunError> for ErrorReport {
    fn from(err: &RunError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Serializable form of a [`RunOutcome`]. Exactly one of `output` and
/// `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<ErrorReport>,
}

impl From<RunOutcome> for RunResult {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            Ok(output) => Self {
                success: true,
                output: Some(output),
                error: None,
            },
            Err(err) => Self {
                success: false,
                output: None,
                error: Some(ErrorReport::from(&err)),
            },
        }
    }
}

/// Run a snippet and package the outcome for serialization.
pub fn run_to_result(source: &str, dialect: Dialect, config: &RunConfig) -> RunResult {
    run_with_config(source, dialect, config).into()
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
