//! Run configuration.

use serde::{Deserialize, Serialize};
use snip_eval::DEFAULT_MAX_OUTPUT_BYTES;

/// Returned in place of output when a run printed nothing.
pub const NO_OUTPUT_MESSAGE: &str = "Program executed, but produced no output";

/// Knobs for a single run. Every field has a default, so a partial JSON
/// object (or `{}`) deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cap on the total produced output, newlines included.
    pub max_output_bytes: usize,
    /// Success text used when no print statement emitted anything.
    pub no_output_message: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            no_output_message: NO_OUTPUT_MESSAGE.to_string(),
        }
    }
}
