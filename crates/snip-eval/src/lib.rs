//! snip evaluator.
//!
//! Builds a flat [`VariableContext`] from a parsed program's assignments,
//! then resolves every print statement into an explicit [`Emission`].

pub mod env;
pub mod error;
pub mod evaluator;

pub use env::VariableContext;
pub use error::{EvalError, EvalResult};
pub use evaluator::{Emission, Emitted, Evaluation, Evaluator, DEFAULT_MAX_OUTPUT_BYTES};
