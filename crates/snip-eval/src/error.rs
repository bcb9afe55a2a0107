//! Runtime error types for the snip evaluator.

use thiserror::Error;

/// Failures while resolving print statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The left side of a repetition names a variable that holds a number.
    #[error("cannot repeat '{name}': expected a string, found a {found}")]
    RepeatNonString { name: String, found: &'static str },

    /// Negative or infinite repetition count.
    #[error("invalid count value: {0}")]
    InvalidRepeatCount(String),

    /// Produced output would exceed the configured cap.
    #[error("output exceeds the limit of {limit} bytes")]
    OutputLimitExceeded { limit: usize },
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
