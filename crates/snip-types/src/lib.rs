//! Shared types for the snip snippet runner.
//!
//! This crate defines the dialect tag, scalar values, the typed statement
//! AST, source spans and the closed error enumeration used across every
//! stage of the pipeline.

mod dialect;
mod error;
mod span;
mod value;
pub mod ast;

pub use dialect::{Dialect, UnknownDialect};
pub use error::{ErrorKind, RunError, STRINGS_IMPORT_HELP};
pub use span::{SourceFile, Span};
pub use value::{format_number, parse_number, Value};

/// Result type used throughout the snip pipeline.
pub type Result<T> = std::result::Result<T, RunError>;
