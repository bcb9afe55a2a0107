//! snip parser: converts a token stream into a typed statement list.

mod literal;
mod parse_stmt;
mod parser;

pub use literal::{match_repeat_call, strip_edge_chars, strip_outer_quotes};
pub use parser::Parser;
